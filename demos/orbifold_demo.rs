#[path = "support/report.rs"]
mod report;

fn main() {
    for text in report::DEMO_SYMBOLS {
        println!("{}", report::describe(text));
    }
}
