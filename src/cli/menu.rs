//! The numbered console menu

use std::fmt;

/// One entry of the Saving Money Cat menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LogDailyExpenses,
    WeeklySummary,
    MonthlySummary,
    BigPurchase,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::LogDailyExpenses,
        MenuChoice::WeeklySummary,
        MenuChoice::MonthlySummary,
        MenuChoice::BigPurchase,
        MenuChoice::Exit,
    ];

    /// Parse the user's answer; `None` for anything that is not an entry
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::LogDailyExpenses),
            "2" => Some(MenuChoice::WeeklySummary),
            "3" => Some(MenuChoice::MonthlySummary),
            "4" => Some(MenuChoice::BigPurchase),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::LogDailyExpenses => 1,
            MenuChoice::WeeklySummary => 2,
            MenuChoice::MonthlySummary => 3,
            MenuChoice::BigPurchase => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::LogDailyExpenses => "Log daily expenses",
            MenuChoice::WeeklySummary => "View weekly summary",
            MenuChoice::MonthlySummary => "View monthly summary",
            MenuChoice::BigPurchase => "Record big purchase",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// The full menu text
pub fn format_menu() -> String {
    let mut output = String::from("\n--- Saving Money Cat Menu ---\n");
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}\n", choice));
    }
    output
}
