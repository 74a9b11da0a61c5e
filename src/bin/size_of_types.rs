use ctype_report::{driver, Report};

fn main() {
    driver::main(
        "Print the sizes of the C fundamental types",
        Report::size_of_types(),
    );
}
