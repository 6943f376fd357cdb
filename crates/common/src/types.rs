use teloxide::types::UserId as TgUserId;

pub type Id = i64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub u64);

macro_rules! cast {
    ($($from:ty => $to:ty : $value:ident => $convert:expr),* $(,)?) => {
        $(impl From<$from> for $to {
            fn from($value: $from) -> Self {
                $convert
            }
        })*
    };
}

cast!(
    TgUserId => UserId: v => Self(v.0),

    Id => UserId: v => Self(v as _),
    UserId => Id: v => v.0 as _,
);

/// Simple [`std::fmt::Display`] implementation
macro_rules! display {
    ($($from:ty : $self:ident => $value:expr),* $(,)?) => {
        $(impl ::std::fmt::Display for $from {
            fn fmt(&$self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $value.fmt(f)
            }
        })*
    };
}

display!(
    UserId: self => self.0,
);
