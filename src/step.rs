//! Test step parsing.
//!
//! A suite specification holds one step per line in the form
//! `fileName,version,expectFailure`.

use std::fmt;

use crate::error::StepError;

const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 3;

/// One `(file name, version, expect failure)` assertion against a cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestStep {
    file_name: String,
    version: u32,
    expect_failure: bool,
}

impl TestStep {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn expect_failure(&self) -> bool {
        self.expect_failure
    }

    /// The on-disk reference name, `<base>.<version>.<extension>`.
    pub fn composite_name(&self) -> String {
        // Parsing guarantees the file name has a dot.
        composite_name(&self.file_name, self.version).unwrap_or_default()
    }
}

impl fmt::Display for TestStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.file_name, self.version, self.expect_failure
        )
    }
}

/// Splits `file_name` on its last `.` and inserts the version between base
/// and extension. Returns `None` for names without a dot.
pub fn composite_name(file_name: &str, version: u32) -> Option<String> {
    let (base, extension) = file_name.rsplit_once('.')?;
    Some(format!("{base}.{version}.{extension}"))
}

pub fn parse_step(line: &str) -> Result<TestStep, StepError> {
    // Empty tokens are dropped, so "a,,1,true" still has three fields.
    let parts: Vec<&str> = line
        .split(FIELD_SEPARATOR)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != FIELD_COUNT {
        return Err(StepError::malformed_step(line));
    }

    let file_name = parts[0];
    if !file_name.contains('.') {
        return Err(StepError::missing_extension(line));
    }

    let version = parts[1]
        .parse::<u32>()
        .map_err(|_| StepError::invalid_version(parts[1]))?;

    let expect_failure = parts[2].eq_ignore_ascii_case("true");

    Ok(TestStep {
        file_name: file_name.to_string(),
        version,
        expect_failure,
    })
}

/// Parses every line independently, logging and skipping the ones that fail.
pub fn parse_steps<'a, I>(lines: I) -> Vec<TestStep>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| match parse_step(line) {
            Ok(step) => Some(step),
            Err(e) => {
                tracing::warn!("Dropping step: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_valid_line() {
        let step = parse_step("hero.png,3,false").unwrap();
        assert_eq!(step.file_name(), "hero.png");
        assert_eq!(step.version(), 3);
        assert!(!step.expect_failure());
    }

    #[test]
    fn test_parse_expect_failure_case_insensitive() {
        assert!(parse_step("hero.png,4,true").unwrap().expect_failure());
        assert!(parse_step("hero.png,4,TRUE").unwrap().expect_failure());
        assert!(parse_step("hero.png,4,tRuE").unwrap().expect_failure());
    }

    #[test]
    fn test_parse_expect_failure_lenient() {
        assert!(!parse_step("hero.png,4,yes").unwrap().expect_failure());
        assert!(!parse_step("hero.png,4,1").unwrap().expect_failure());
        assert!(!parse_step("hero.png,4, true").unwrap().expect_failure());
    }

    #[test]
    fn test_parse_two_fields_is_malformed() {
        assert_eq!(
            parse_step("hero.png,4"),
            Err(StepError::malformed_step("hero.png,4"))
        );
    }

    #[test]
    fn test_parse_four_fields_is_malformed() {
        assert!(matches!(
            parse_step("hero.png,4,true,extra"),
            Err(StepError::MalformedStep { .. })
        ));
    }

    #[test]
    fn test_parse_empty_line_is_malformed() {
        assert!(matches!(
            parse_step(""),
            Err(StepError::MalformedStep { .. })
        ));
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        let step = parse_step(",hero.png,,7,true,").unwrap();
        assert_eq!(step.file_name(), "hero.png");
        assert_eq!(step.version(), 7);
        assert!(step.expect_failure());
    }

    #[test]
    fn test_parse_invalid_version() {
        assert_eq!(
            parse_step("hero.png,-1,false"),
            Err(StepError::invalid_version("-1"))
        );
        assert_eq!(
            parse_step("hero.png,three,false"),
            Err(StepError::invalid_version("three"))
        );
        assert_eq!(
            parse_step("hero.png,4294967296,false"),
            Err(StepError::invalid_version("4294967296"))
        );
    }

    #[test]
    fn test_parse_max_version() {
        let step = parse_step("hero.png,4294967295,false").unwrap();
        assert_eq!(step.version(), u32::MAX);
        assert_eq!(step.composite_name(), "hero.4294967295.png");
    }

    #[test]
    fn test_parse_missing_extension() {
        assert_eq!(
            parse_step("README,1,false"),
            Err(StepError::missing_extension("README,1,false"))
        );
        assert!(matches!(
            parse_step("README,1,false"),
            Err(StepError::MalformedStep { .. })
        ));
    }

    #[test]
    fn test_parse_is_structural() {
        let a = parse_step("hero.png,3,false").unwrap();
        let b = parse_step("hero.png,3,FALSE").unwrap();
        assert_eq!(a, b);

        let set: HashSet<TestStep> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_composite_name_uses_last_dot() {
        assert_eq!(composite_name("hero.png", 3).as_deref(), Some("hero.3.png"));
        assert_eq!(
            composite_name("archive.tar.gz", 12).as_deref(),
            Some("archive.tar.12.gz")
        );
        assert_eq!(composite_name(".png", 0).as_deref(), Some(".0.png"));
        assert_eq!(composite_name("hero.", 5).as_deref(), Some("hero.5."));
        assert_eq!(composite_name("hero", 5), None);
    }

    #[test]
    fn test_composite_name_ignores_expect_failure() {
        let a = parse_step("hero.png,3,false").unwrap();
        let b = parse_step("hero.png,3,true").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.composite_name(), b.composite_name());
    }

    #[test]
    fn test_parse_steps_keeps_order_and_drops_bad_lines() {
        let steps = parse_steps(["hero.png,1,false", "hero.png,4", "logo.gif,2,true"]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].file_name(), "hero.png");
        assert_eq!(steps[1].file_name(), "logo.gif");
    }

    #[test]
    fn test_display() {
        let step = parse_step("hero.png,3,True").unwrap();
        assert_eq!(step.to_string(), "hero.png,3,true");
    }
}
