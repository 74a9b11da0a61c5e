use ctype_report::{driver, Report};

fn main() {
    driver::main(
        "Print the operating system and the sizes of int, long and long long",
        Report::platform_specific(),
    );
}
