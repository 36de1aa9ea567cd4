use chrono::{DateTime, Local};

/// 摘要结果（固定文本）
pub const SUMMARY_TEXT: &str = "📑 Summary:\n\nThis document covers rent, deposit, lock-in period, utilities, penalties, and termination terms.";

/// 风险结果（固定文本）
pub const RISKS_TEXT: &str = "⚠️ Risks:\n\n- Security Deposit (2 months)\n- Lock-in Period (6 months)\n- Rent Escalation (8%)\n- Penalty for late payment\n- Arbitration clause";

/// 条款解释结果（固定文本）
pub const CLAUSE_TEXT: &str = "🔍 Clause Explanation:\n\nLock-in Period means you cannot leave the house before 6 months, or else you may lose your deposit.";

/// 历史记录条目的固定后缀
pub const HISTORY_SUFFIX: &str = " checked";

/// 历史记录条目
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub text: String,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(label: &str) -> Self {
        Self {
            text: format!("{}{}", label, HISTORY_SUFFIX),
            recorded_at: Local::now(),
        }
    }
}

/// 结果显示区，每次操作整体覆盖
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultDisplay {
    text: String,
}

impl ResultDisplay {
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// 只追加的历史记录列表
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按调用顺序返回所有条目文本
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}
