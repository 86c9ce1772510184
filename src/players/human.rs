use crate::gameroom::Reader;
use dialoguer::Input;

/// Console input for the human seat.
///
/// Terminal errors read as blank input, which the engine treats as the
/// harmless default for whatever it asked. A broken terminal at the start
/// prompt quits instead of asking forever.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn ask(prompt: &str) -> anyhow::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .inspect_err(|e| log::warn!("console input failed: {}", e))
            .map_err(anyhow::Error::from)
    }
}

impl Reader for Human {
    fn start(&mut self) -> String {
        Self::ask("Deal a round? [y/n]").unwrap_or_else(|_| "n".to_string())
    }
    fn demand(&mut self) -> String {
        Self::ask("Demand [0-3]").unwrap_or_default()
    }
    fn turn(&mut self, prompt: &str) -> String {
        Self::ask(&format!("{} (ranks, blank to pass)", prompt)).unwrap_or_default()
    }
}
