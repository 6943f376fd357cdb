use db::models::FeedbackKind;

/// Bumped when layout of callback payload changes, so buttons from old
/// messages are rejected instead of misread
pub const CALLBACK_VERSION: u8 = 1;

const SEP: char = ':';

// flags is after version: {version}:{flag}:{payload}
const FEEDBACK_FLAG: &str = "feedback";

// payload tokens: {version}:{feedback-flag}:{kind}
const LIKE_TOKEN: &str = "like";
const IMPROVE_TOKEN: &str = "improve";

pub(crate) trait PayloadData {
    type Error;

    fn to_payload(&self) -> String;
    fn try_from_payload(payload: &str) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Callback {
    /// User picked kind of feedback on inline keyboard
    ChooseKind(FeedbackKind),
}

impl Callback {
    pub(crate) fn choose_kind(kind: FeedbackKind) -> Self {
        Self::ChooseKind(kind)
    }
}

impl PayloadData for Callback {
    type Error = PayloadParseError;

    fn to_payload(&self) -> String {
        match self {
            Self::ChooseKind(kind) => {
                format!("{CALLBACK_VERSION}{SEP}{FEEDBACK_FLAG}{SEP}{}", kind.to_payload())
            }
        }
    }

    fn try_from_payload(payload: &str) -> Result<Self, Self::Error> {
        let parts: Vec<_> = payload.split(SEP).collect();
        let [version, flag, rest @ ..] = parts.as_slice() else {
            return Err(PayloadParseError::InvalidSize);
        };
        if *version != CALLBACK_VERSION.to_string() {
            return Err(PayloadParseError::UnsupportedVersion(version.to_string()));
        }

        match (*flag, rest) {
            (FEEDBACK_FLAG, [kind]) => Ok(Self::ChooseKind(FeedbackKind::try_from_payload(kind)?)),
            (FEEDBACK_FLAG, _) => Err(PayloadParseError::InvalidSize),
            (flag, _) => Err(PayloadParseError::UnknownType(flag.to_string())),
        }
    }
}

impl PayloadData for FeedbackKind {
    type Error = PayloadParseError;

    fn to_payload(&self) -> String {
        match self {
            Self::Like => LIKE_TOKEN.to_string(),
            Self::Improvement => IMPROVE_TOKEN.to_string(),
        }
    }

    fn try_from_payload(payload: &str) -> Result<Self, Self::Error> {
        match payload {
            LIKE_TOKEN => Ok(Self::Like),
            IMPROVE_TOKEN => Ok(Self::Improvement),
            _ => Err(PayloadParseError::UnknownKind(payload.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PayloadParseError {
    #[error("invalid number of payload elements")]
    InvalidSize,
    #[error("unsupported payload version: {0}")]
    UnsupportedVersion(String),
    #[error("unknown callback type: {0}")]
    UnknownType(String),
    #[error("unknown feedback kind: {0}")]
    UnknownKind(String),
}
