use std::fmt;
use std::str::FromStr;

/// Category assigned to every income submission.
pub const INCOME_CATEGORY: &str = "Income";

/// The fixed set of categories an expense may be filed under.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ExpenseCategory {
    FoodAndBeverages,
    Transportation,
    Shopping,
    BillsAndUtilities,
    Entertainment,
    Others
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::FoodAndBeverages,
        ExpenseCategory::Transportation,
        ExpenseCategory::Shopping,
        ExpenseCategory::BillsAndUtilities,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Others
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::FoodAndBeverages => "Food & Beverages",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::BillsAndUtilities => "Bills & Utilities",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Others => "Others"
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| format!("Unknown category '{value}'"))
    }
}
