//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型。値はすべてバックエンドが整形済みの
//! 表示用文字列で、このクレートでは計算しない。

use serde::{Deserialize, Serialize};

/// 取引明細1件分の解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// 口座名義（フィードバックのキーにも使う）
    pub name: String,
    pub account_info: AccountInfo,
    pub financial_summary: FinancialSummary,
    pub analysis: LoanAnalysis,
    /// バックエンドの生の解析テキスト
    pub raw_analysis: String,
}

/// 口座情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    pub account_number: String,
    pub account_type: String,
    pub bank: String,
}

/// 収支サマリ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSummary {
    pub statement_period: String,
    pub opening_balance: String,
    pub closing_balance: String,
    pub total_deposits: String,
    pub total_withdrawals: String,
    pub average_monthly_balance: String,
}

/// 融資判定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanAnalysis {
    pub decision: String,
    pub stats: AnalysisStats,
    pub conclusion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisStats {
    pub monthly_income: String,
    pub spending_patterns: String,
    pub balance_trends: String,
    pub risk_factors: String,
}
