//! 별점 + 분류 + 자유 입력으로 구성된 피드백 양식.

use serde::Serialize;

/// 별점 최댓값.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    #[default]
    General,
    Bug,
    Feature,
    Accuracy,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 4] = [
        FeedbackCategory::General,
        FeedbackCategory::Bug,
        FeedbackCategory::Feature,
        FeedbackCategory::Accuracy,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            FeedbackCategory::General => "feedback.category.general",
            FeedbackCategory::Bug => "feedback.category.bug",
            FeedbackCategory::Feature => "feedback.category.feature",
            FeedbackCategory::Accuracy => "feedback.category.accuracy",
        }
    }
}

/// 빠른 피드백 버튼의 번역 키. 누르면 본문에 한 줄씩 추가된다.
pub const QUICK_FEEDBACK_KEYS: [&str; 4] = [
    "feedback.quick.helpful",
    "feedback.quick.more_features",
    "feedback.quick.easy_to_use",
    "feedback.quick.improve_accuracy",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("feedback message is empty")]
    EmptyMessage,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

impl FeedbackError {
    /// 화면에 보여줄 번역 키.
    pub fn message_key(&self) -> &'static str {
        match self {
            FeedbackError::EmptyMessage => "feedback.error.empty_message",
            FeedbackError::InvalidEmail(_) => "feedback.error.invalid_email",
        }
    }
}

/// 제출된 피드백. 양식은 제출 후 초기화된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackReceipt {
    /// 0이면 별점 미선택
    pub rating: u8,
    pub category: FeedbackCategory,
    pub email: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub rating: u8,
    pub category: FeedbackCategory,
    pub email: String,
    pub message: String,
}

impl FeedbackForm {
    /// 별점은 1~5로 제한한다.
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = stars.clamp(1, MAX_RATING);
    }

    pub fn append_quick_feedback(&mut self, text: &str) {
        if !self.message.is_empty() {
            self.message.push('\n');
        }
        self.message.push_str(text);
    }

    pub fn can_submit(&self) -> bool {
        !self.message.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), FeedbackError> {
        if !self.can_submit() {
            return Err(FeedbackError::EmptyMessage);
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_plausible_email(email) {
            return Err(FeedbackError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// 검증 후 접수증을 만들고 양식을 비운다. 실패하면 입력을 그대로 둔다.
    pub fn submit(&mut self) -> Result<FeedbackReceipt, FeedbackError> {
        self.validate()?;
        let form = std::mem::take(self);
        let email = form.email.trim();
        let receipt = FeedbackReceipt {
            rating: form.rating,
            category: form.category,
            email: (!email.is_empty()).then(|| email.to_string()),
            message: form.message.trim().to_string(),
        };
        tracing::info!(
            rating = receipt.rating,
            category = ?receipt.category,
            has_email = receipt.email.is_some(),
            chars = receipt.message.chars().count(),
            "feedback submitted"
        );
        Ok(receipt)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
