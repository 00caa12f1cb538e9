use crate::books::BookStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::StateStore;

/// Shows the current theme, or persists a new one when `mode` is given.
pub fn run<S: StateStore>(store: &mut BookStore<S>, mode: Option<Theme>) -> Result<CmdResult> {
    match mode {
        Some(theme) => {
            store.set_theme(theme)?;
            let mut result = CmdResult::default().with_theme(theme);
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
            Ok(result)
        }
        None => Ok(CmdResult::default().with_theme(store.theme())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn defaults_to_light() {
        let mut store = fixtures::empty_store();
        let result = run(&mut store, None).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
    }

    #[test]
    fn set_persists_across_reads() {
        let mut store = fixtures::empty_store();
        run(&mut store, Some(Theme::Dark)).unwrap();

        let result = run(&mut store, None).unwrap();
        assert_eq!(result.theme, Some(Theme::Dark));
    }
}
