pub mod file;
pub mod stdin;

use payplan_core::payoff::simulator::Debt;

/// Load the debt snapshot from a file when given, otherwise from piped stdin.
pub fn load_debts(path: Option<&str>) -> Result<Vec<Debt>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return file::read_debts(path);
    }

    if let Some(value) = stdin::read_stdin()? {
        let debts: Vec<Debt> = serde_json::from_value(value)?;
        return Ok(debts);
    }

    Err("provide --input <debts.json|debts.yaml> or pipe the debt snapshot on stdin".into())
}
