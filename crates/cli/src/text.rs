//! Fixed console copy.

pub const BANNER: &str = "\
==========================================
     Rogonirnoy — English Symptom Checker (CLI)
==========================================
⚠️ Educational/demo tool only — not a substitute for medical care.
";

pub const MENU: &str = "Menu:\n  1) Start new check\n  2) About this program\n  3) Exit";

pub const ABOUT: &str = "
This tool uses rule-based scoring. It matches your reported symptoms
against weighted condition profiles and shows the top matches.

• Red-flag combos will prompt urgent advice.
• All processing is local, no internet required.
• Educational purposes only.
";

pub const INTRO: &str = "🧭 You will be asked about symptoms. Answer 'yes' if applicable.";

pub const FAREWELL: &str = "Thank you. Stay healthy! ✨";

pub const DISCLAIMER: &str =
    "Disclaimer: This is not medical advice. See a doctor for concerning symptoms.";

pub const RED_FLAG_CONSOLE: &str =
    "⚠️ Red flag detected: the following symptom combinations are present → consider urgent care.";

pub const RED_FLAG_REPORT: &str = "⚠️ Red flag detected: consider urgent medical attention.";
