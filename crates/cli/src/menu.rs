//! Interactive menu loop.

use crate::prompt::{ask_all_symptoms, read_int, yes_no, IntPrompt};
use crate::report::{format_report, format_results, save_report};
use crate::text::{ABOUT, BANNER, FAREWELL, MENU};
use crate::ShellResult;
use rogo_core::{Assessment, SymptomAnswers, SymptomChecker};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// The interactive shell: menu, symptom questions, results and optional report.
///
/// Generic over its input and output so sessions can be scripted in tests.
pub struct Shell<'kb, R, W> {
    checker: SymptomChecker<'kb>,
    input: R,
    output: W,
    report_path: PathBuf,
}

/// Outcome of one completed check.
#[derive(Debug)]
pub struct CheckOutcome<'kb> {
    pub answers: SymptomAnswers,
    pub assessment: Assessment<'kb>,
    pub saved_report: Option<PathBuf>,
}

impl<'kb, R: BufRead, W: Write> Shell<'kb, R, W> {
    pub fn new(checker: SymptomChecker<'kb>, input: R, output: W, report_path: PathBuf) -> Self {
        Self {
            checker,
            input,
            output,
            report_path,
        }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        writeln!(self.output, "{BANNER}")?;

        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match read_int(
                &mut self.input,
                &mut self.output,
                "Your choice (1-3): ",
                IntPrompt::between(1, 3),
            ) {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{FAREWELL}")?;
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            match choice {
                1 => {
                    self.run_check()?;
                    writeln!(self.output)?;
                }
                2 => writeln!(self.output, "{ABOUT}")?,
                _ => {
                    writeln!(self.output, "{FAREWELL}")?;
                    return Ok(());
                }
            }
        }
    }

    /// Ask every question, show results, and offer to save a report.
    pub fn run_check(&mut self) -> ShellResult<CheckOutcome<'kb>> {
        let kb = self.checker.knowledge_base();
        let answers = ask_all_symptoms(kb, &mut self.input, &mut self.output)?;
        let assessment = self.checker.evaluate(&answers);

        writeln!(self.output, "\n{}", format_results(&assessment))?;

        let mut saved_report = None;
        if yes_no(&mut self.input, &mut self.output, "Save a .txt report?")? {
            let text = format_report(kb, &answers, &assessment, &chrono::Local::now());
            let path = save_report(&self.report_path, &text)?;
            writeln!(self.output, "✅ Report saved: {}", path.display())?;
            saved_report = Some(path);
        }

        Ok(CheckOutcome {
            answers,
            assessment,
            saved_report,
        })
    }

    /// Give back the output sink, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogo_core::{knowledge::builtin, SymptomId};
    use std::io::Cursor;

    /// Answers for a full questionnaire with only the listed symptoms set to "yes".
    fn questionnaire(yes: &[SymptomId]) -> String {
        let kb = builtin().expect("builtin kb");
        kb.catalog()
            .iter()
            .map(|entry| if yes.contains(&entry.id) { "yes\n" } else { "no\n" })
            .collect()
    }

    fn shell(script: String, report_path: PathBuf) -> Shell<'static, Cursor<Vec<u8>>, Vec<u8>> {
        let checker = SymptomChecker::new(builtin().expect("builtin kb"), 3);
        Shell::new(checker, Cursor::new(script.into_bytes()), Vec::new(), report_path)
    }

    #[test]
    fn exit_choice_ends_session() {
        let mut shell = shell("3\n".into(), PathBuf::from("unused.txt"));
        shell.run().expect("session");
        let output = String::from_utf8(shell.into_output()).expect("utf-8");
        assert!(output.contains("Rogonirnoy"));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn about_then_closed_input_exits_cleanly() {
        let mut shell = shell("7\n2\n".into(), PathBuf::from("unused.txt"));
        shell.run().expect("session");
        let output = String::from_utf8(shell.into_output()).expect("utf-8");
        assert!(output.contains("Maximum is 3"));
        assert!(output.contains("rule-based scoring"));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn check_without_saving() {
        let mut script = questionnaire(&[
            SymptomId::Diarrhea,
            SymptomId::Vomiting,
            SymptomId::DehydrationSigns,
        ]);
        script.push_str("no\n");
        let mut shell = shell(script, PathBuf::from("unused.txt"));

        let outcome = shell.run_check().expect("check");
        assert!(outcome.saved_report.is_none());
        assert!(outcome.assessment.urgent());
        assert_eq!(
            outcome.assessment.ranking.top().map(|r| r.name),
            Some("Dehydration")
        );

        let output = String::from_utf8(shell.into_output()).expect("utf-8");
        assert!(output.contains("===== Results ====="));
        assert!(output.contains("   - dehydration_signs, vomiting, diarrhea"));
    }

    #[test]
    fn full_session_saves_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report_path = dir.path().join("report.txt");

        let mut script = String::from("1\n");
        script.push_str(&questionnaire(&[SymptomId::Headache, SymptomId::Photophobia]));
        script.push_str("yes\n3\n");
        let mut shell = shell(script, report_path.clone());
        shell.run().expect("session");

        let report = std::fs::read_to_string(&report_path).expect("report written");
        assert!(report.contains("- Do you have a headache?: Yes"));
        assert!(report.contains("• Migraine"));

        let output = String::from_utf8(shell.into_output()).expect("utf-8");
        assert!(output.contains("✅ Report saved:"));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn check_fails_when_input_ends_mid_questionnaire() {
        let mut shell = shell("yes\nno\n".into(), PathBuf::from("unused.txt"));
        let err = shell.run_check().expect_err("eof");
        assert!(matches!(
            err,
            crate::ShellError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof
        ));
    }
}
