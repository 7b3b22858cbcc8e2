//! Interactive prompts.
//!
//! Every prompt keeps asking until it gets a usable answer. Running out of input is reported
//! as [`io::ErrorKind::UnexpectedEof`] rather than being read as "no".

use crate::text::INTRO;
use rogo_core::{KnowledgeBase, SymptomAnswers};
use std::io::{self, BufRead, Write};

/// Accepted spellings of "yes".
pub const YES_WORDS: [&str; 4] = ["yes", "y", "1", "true"];

/// Accepted spellings of "no".
pub const NO_WORDS: [&str; 4] = ["no", "n", "0", "false"];

/// Interpret a yes/no reply. Case and surrounding whitespace are ignored.
pub fn parse_yes_no(reply: &str) -> Option<bool> {
    let reply = reply.trim().to_lowercase();
    if YES_WORDS.contains(&reply.as_str()) {
        Some(true)
    } else if NO_WORDS.contains(&reply.as_str()) {
        Some(false)
    } else {
        None
    }
}

fn read_reply<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    Ok(line)
}

/// Ask a yes/no question.
pub fn yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    loop {
        write!(output, "{question} (yes/no): ")?;
        output.flush()?;
        if let Some(answer) = parse_yes_no(&read_reply(input)?) {
            return Ok(answer);
        }
        writeln!(output, "⚠️ Please answer 'yes' or 'no'.")?;
    }
}

/// Bounds and default for [`read_int`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntPrompt {
    pub default: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntPrompt {
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            default: None,
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Ask for an integer within optional inclusive bounds.
///
/// An empty reply returns `rules.default` when one is set.
pub fn read_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    rules: IntPrompt,
) -> io::Result<i64> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let reply = read_reply(input)?;
        let reply = reply.trim();

        if reply.is_empty() {
            if let Some(default) = rules.default {
                return Ok(default);
            }
        }

        let Ok(value) = reply.parse::<i64>() else {
            writeln!(output, "⚠️ Please enter an integer (e.g. 0, 1, 2 ...)")?;
            continue;
        };
        if let Some(min) = rules.min.filter(|min| value < *min) {
            writeln!(output, "⚠️ Minimum is {min}")?;
            continue;
        }
        if let Some(max) = rules.max.filter(|max| value > *max) {
            writeln!(output, "⚠️ Maximum is {max}")?;
            continue;
        }
        return Ok(value);
    }
}

/// Ask every catalog question, in catalog order.
pub fn ask_all_symptoms<R: BufRead, W: Write>(
    kb: &KnowledgeBase,
    input: &mut R,
    output: &mut W,
) -> io::Result<SymptomAnswers> {
    writeln!(output, "\n{INTRO}\n")?;
    let mut answers = SymptomAnswers::new();
    for entry in kb.catalog() {
        let present = yes_no(input, output, entry.question.as_str())?;
        answers.set(entry.id, present);
    }
    tracing::debug!(reported = answers.present_count(), "collected symptom answers");
    Ok(answers)
}
