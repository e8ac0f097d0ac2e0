//! Console reporter — human-readable output with color codes.

use super::Reporter;
use crate::evaluation::EvaluatedGate;
use verdict_core::types::Level;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn level_symbol(&self, level: Level) -> &'static str {
        match level {
            Level::Ok => "✓",
            Level::Warn => "⚠",
            Level::Error => "✗",
        }
    }

    fn color_start(&self, level: Level) -> &'static str {
        if !self.use_color {
            return "";
        }
        match level {
            Level::Ok => "\x1b[32m",    // green
            Level::Warn => "\x1b[33m",  // yellow
            Level::Error => "\x1b[31m", // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, gate: &EvaluatedGate) -> Result<String, String> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║           Quality Gate Report            ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        for evaluated in gate.conditions() {
            let condition = evaluated.condition();
            let level = evaluated.level();
            let cs = self.color_start(level);
            let ce = self.color_end();
            let scope = if condition.on_new_code { " [new code]" } else { "" };
            let actual = if evaluated.actual_value().is_empty() {
                "-"
            } else {
                evaluated.actual_value()
            };
            output.push_str(&format!(
                "{}{} {}{} {} (warning: {}, error: {}) — actual: {}{}\n",
                cs,
                self.level_symbol(level),
                condition.metric_key,
                ce,
                condition.op,
                condition.warning.as_deref().unwrap_or("-"),
                condition.error.as_deref().unwrap_or("-"),
                actual,
                scope,
            ));
        }

        if gate.ignored_conditions() {
            output.push_str("\n⊘ some conditions were ignored (missing data or configuration errors)\n");
        }

        let level = gate.level();
        output.push_str(&format!(
            "\n─── Result: {}{} {}{} ───\n",
            self.color_start(level),
            self.level_symbol(level),
            level,
            self.color_end(),
        ));

        Ok(output)
    }
}
