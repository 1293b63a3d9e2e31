use std::process::ExitCode;

fn main() -> ExitCode {
    line_diff::main()
}
