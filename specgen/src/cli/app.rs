use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const FROM_EXCEL_EXAMPLES: &str = "\
Accepted sheet layouts:
  Vertical (label in column A, value in column B):
    コンポーネント名 | DatePicker
    説明             | 日付選択コンポーネント
    ## プロパティ
    minDate          | Date | 最小日付

  Tabular (header row, then one data row):
    コンポーネント名 | 説明             | カテゴリ
    DatePicker       | 日付選択コンポーネント | form

Examples:
  spec-from-excel component-spec.xlsx
  spec-from-excel component-spec.xlsx Sheet2
  spec-from-excel component-spec.csv --root ../site

Environment:
  ANTHROPIC_API_KEY  enables remote generation; without it a local template is used";

const GENERATE_EXAMPLES: &str = "\
Examples:
  spec-generate ScrollBar \"縦横両対応のスクロールバー\"
  spec-generate DatePicker \"日付選択コンポーネント\" form ComboBox

BASE_ON names an existing component whose demo page and implementation are
used as style reference.

Environment:
  ANTHROPIC_API_KEY  enables remote generation; without it a local template is used";

/// Flags shared by both commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file (default: <ROOT>/specgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root that output and reference paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Parser, Debug)]
#[command(
    name = "spec-from-excel",
    version,
    about = "Generate a component documentation page from a spreadsheet",
    after_help = FROM_EXCEL_EXAMPLES
)]
pub struct FromExcelCli {
    /// Spreadsheet to read (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv)
    pub path: PathBuf,

    /// Sheet to read (default: the first sheet)
    pub sheet: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "spec-generate",
    version,
    about = "Generate a component documentation page from a name and description",
    after_help = GENERATE_EXAMPLES
)]
pub struct GenerateCli {
    /// Component name, e.g. DatePicker
    pub name: String,

    /// One-line description of the component
    pub description: String,

    /// Component category
    #[arg(value_enum, default_value_t = CategoryArg::Ui)]
    pub category: CategoryArg,

    /// Existing component to use as style reference
    pub base_on: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    Ui,
    Layout,
    Form,
    Feedback,
}

impl CategoryArg {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryArg::Ui => "ui",
            CategoryArg::Layout => "layout",
            CategoryArg::Form => "form",
            CategoryArg::Feedback => "feedback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_commands_are_well_formed() {
        FromExcelCli::command().debug_assert();
        GenerateCli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = GenerateCli::try_parse_from(["spec-generate", "Spinner", "stepper"]).unwrap();
        assert_eq!(cli.category, CategoryArg::Ui);
        assert_eq!(cli.base_on, None);
        assert_eq!(cli.global.root, PathBuf::from("."));
    }

    #[test]
    fn test_generate_all_positionals() {
        let cli = GenerateCli::try_parse_from([
            "spec-generate",
            "DatePicker",
            "日付選択",
            "form",
            "ComboBox",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.category.as_str(), "form");
        assert_eq!(cli.base_on.as_deref(), Some("ComboBox"));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(GenerateCli::try_parse_from(["spec-generate", "X", "y", "widget"]).is_err());
    }

    #[test]
    fn test_from_excel_args() {
        let cli = FromExcelCli::try_parse_from(["spec-from-excel", "spec.xlsx", "Sheet2", "--root", "site"])
            .unwrap();
        assert_eq!(cli.path, PathBuf::from("spec.xlsx"));
        assert_eq!(cli.sheet.as_deref(), Some("Sheet2"));
        assert_eq!(cli.global.root, PathBuf::from("site"));
    }
}
