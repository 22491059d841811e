//! 結果パネルの表示定義
//!
//! CLIとWebで同じ見出し・並びを使うための定義。マークアップは持たない。

use crate::types::AnalysisResult;

pub const NO_RESULTS_MESSAGE: &str = "No analysis results yet. Upload bank statements to begin.";
pub const UPLOAD_HINT: &str = "Upload up to 20 PDF bank statements";

/// 推奨アップロード上限（超えても送信はする）
pub const MAX_RECOMMENDED_FILES: usize = 20;

pub const SUBMIT_LABEL: &str = "Analyze Statements";
pub const SUBMIT_LABEL_LOADING: &str = "Analyzing...";

/// 判定文言から決める表示トーン（色分け専用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionTone {
    Favourable,
    Unfavourable,
}

impl DecisionTone {
    pub fn from_decision(decision: &str) -> Self {
        if decision.to_lowercase().contains("approve") {
            DecisionTone::Favourable
        } else {
            DecisionTone::Unfavourable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionTone::Favourable => "favourable",
            DecisionTone::Unfavourable => "unfavourable",
        }
    }
}

/// 見出し付きの1項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

const fn field<'a>(label: &'static str, value: &'a str) -> Field<'a> {
    Field { label, value }
}

/// 結果パネル1枚分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel<'a> {
    pub title: &'a str,
    /// "bank • account type"
    pub subtitle: String,
    pub account_number: &'a str,
    pub decision: &'a str,
    pub tone: DecisionTone,
    /// 入金合計・出金合計・平均残高
    pub summary: [Field<'a>; 3],
    /// 期間・期首残高・期末残高
    pub period: [Field<'a>; 3],
    pub sections: [Field<'a>; 4],
    pub conclusion: &'a str,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        let summary = &result.financial_summary;
        let stats = &result.analysis.stats;

        Self {
            title: &result.name,
            subtitle: format!(
                "{} \u{2022} {}",
                result.account_info.bank, result.account_info.account_type
            ),
            account_number: &result.account_info.account_number,
            decision: &result.analysis.decision,
            tone: DecisionTone::from_decision(&result.analysis.decision),
            summary: [
                field("Total Deposits", &summary.total_deposits),
                field("Total Withdrawals", &summary.total_withdrawals),
                field("Average Balance", &summary.average_monthly_balance),
            ],
            period: [
                field("Statement Period", &summary.statement_period),
                field("Opening Balance", &summary.opening_balance),
                field("Closing Balance", &summary.closing_balance),
            ],
            sections: [
                field("Monthly Income Analysis", &stats.monthly_income),
                field("Spending Patterns", &stats.spending_patterns),
                field("Balance Trends", &stats.balance_trends),
                field("Risk Factors", &stats.risk_factors),
            ],
            conclusion: &result.analysis.conclusion,
        }
    }
}
