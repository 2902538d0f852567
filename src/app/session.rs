use crate::core::engine::CheckEngine;
use crate::core::{CheckReport, ConfigProvider, PrimeService};
use crate::utils::error::{PrimeError, Result};
use crate::utils::validation::parse_bound;

/// One line typed in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 更新輸入欄位（可能是空字串，代表清除）
    Input(String),
    Confirm,
    Quit,
}

impl Command {
    /// 只去掉行尾換行；其餘空白原樣交給輸入驗證
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            "" => Command::Confirm,
            ":q" | ":quit" => Command::Quit,
            ":c" | ":clear" => Command::Input(String::new()),
            other => Command::Input(other.to_string()),
        }
    }
}

/// Input field plus the last result shown for it.
///
/// Any change of the value drops the stored result; a new one only appears
/// after [`InputSession::confirm`].
#[derive(Debug, Clone)]
pub struct InputSession {
    max_digits: usize,
    value: Option<i64>,
    result: Option<CheckReport>,
}

impl InputSession {
    pub fn new(max_digits: usize) -> Self {
        Self {
            max_digits,
            value: None,
            result: None,
        }
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn result(&self) -> Option<&CheckReport> {
        self.result.as_ref()
    }

    /// 不合法的輸入會被拒絕，原本的值保持不變
    pub fn set_input(&mut self, raw: &str) -> Result<()> {
        let next = match parse_bound(raw, self.max_digits) {
            Ok(value) => Some(value),
            Err(PrimeError::EmptyInput) => None,
            Err(e) => {
                tracing::debug!("Rejected input '{}': {}", raw, e);
                return Err(e);
            }
        };

        if next != self.value {
            self.value = next;
            self.result = None;
        }
        Ok(())
    }

    pub fn confirm<P: PrimeService, C: ConfigProvider>(
        &mut self,
        engine: &CheckEngine<P, C>,
    ) -> Result<&CheckReport> {
        let bound = self.value.ok_or(PrimeError::EmptyInput)?;
        Ok(&*self.result.insert(engine.evaluate_bound(bound)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::TrialDivision;
    use crate::core::SortOrder;

    struct Defaults;

    impl ConfigProvider for Defaults {
        fn max_digits(&self) -> usize {
            5
        }

        fn order(&self) -> SortOrder {
            SortOrder::Ascending
        }

        fn include_chart(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse(""), Command::Confirm);
        assert_eq!(Command::parse("\r\n"), Command::Confirm);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":clear"), Command::Input(String::new()));
        assert_eq!(Command::parse("97\n"), Command::Input("97".to_string()));
        assert_eq!(Command::parse(" 97 "), Command::Input(" 97 ".to_string()));
    }

    #[test]
    fn test_padded_input_is_rejected() {
        let mut session = InputSession::new(5);
        session.set_input("97").unwrap();

        let Command::Input(raw) = Command::parse(" 98 ") else {
            panic!("expected an input line");
        };
        assert!(matches!(
            session.set_input(&raw),
            Err(PrimeError::InvalidInput { .. })
        ));
        assert_eq!(session.value(), Some(97));
    }

    #[test]
    fn test_confirm_requires_input() {
        let engine = CheckEngine::new(TrialDivision, Defaults);
        let mut session = InputSession::new(5);
        assert!(matches!(
            session.confirm(&engine),
            Err(PrimeError::EmptyInput)
        ));
    }

    #[test]
    fn test_changing_input_discards_result() {
        let engine = CheckEngine::new(TrialDivision, Defaults);
        let mut session = InputSession::new(5);

        session.set_input("7").unwrap();
        assert!(session.confirm(&engine).unwrap().result.is_prime);
        assert!(session.result().is_some());

        // 相同的值不會清掉結果
        session.set_input("007").unwrap();
        assert!(session.result().is_some());

        session.set_input("8").unwrap();
        assert!(session.result().is_none());
        assert_eq!(session.value(), Some(8));
    }

    #[test]
    fn test_invalid_input_keeps_previous_state() {
        let engine = CheckEngine::new(TrialDivision, Defaults);
        let mut session = InputSession::new(5);

        session.set_input("11").unwrap();
        session.confirm(&engine).unwrap();

        assert!(session.set_input("11a").is_err());
        assert!(session.set_input("123456").is_err());
        assert_eq!(session.value(), Some(11));
        assert!(session.result().is_some());
    }

    #[test]
    fn test_clearing_input() {
        let mut session = InputSession::new(5);
        session.set_input("42").unwrap();
        session.set_input("").unwrap();
        assert_eq!(session.value(), None);
    }
}
