//! Dynamically tagged values
//!
//! Rules receive a [`Value`] and check its tag before doing any work. Typed
//! rules go through [`ValueType::extract`], which yields `None` when the tag
//! does not fit; that `None` becomes a `[InvalidType]` failure.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::PaymentCardType;

/// A value under validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// A detected payment card category, produced by the card rule.
    Card(PaymentCardType),
    #[cfg(feature = "temporal")]
    DateTime(chrono::DateTime<chrono::Utc>),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    List,
    Map,
    Card,
    #[cfg(feature = "temporal")]
    DateTime,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Map => "map",
            Self::Card => "card",
            #[cfg(feature = "temporal")]
            Self::DateTime => "date_time",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Card(_) => ValueKind::Card,
            #[cfg(feature = "temporal")]
            Self::DateTime(_) => ValueKind::DateTime,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_card(&self) -> Option<PaymentCardType> {
        match self {
            Self::Card(card) => Some(*card),
            _ => None,
        }
    }

    #[cfg(feature = "temporal")]
    pub fn as_date_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

// ============================================================================
// CONVERSIONS INTO VALUE
// ============================================================================

macro_rules! int_into_value {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        }
    )*};
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<PaymentCardType> for Value {
    fn from(value: PaymentCardType) -> Self {
        Self::Card(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(map: BTreeMap<String, V>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "temporal")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self::DateTime(value)
    }
}

// ============================================================================
// TYPED EXTRACTION
// ============================================================================

/// A Rust type that typed rules (equality, range) operate on.
///
/// `extract` must return `None` for every tag the type does not represent,
/// never coerce across tags (an `Int` is not a `Float`).
pub trait ValueType: Clone + Into<Value> + fmt::Debug + Send + Sync + 'static {
    fn extract(value: &Value) -> Option<Self>;
}

impl ValueType for Value {
    fn extract(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl ValueType for bool {
    fn extract(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl ValueType for i64 {
    fn extract(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

macro_rules! narrow_int_value_type {
    ($($ty:ty),* $(,)?) => {$(
        impl ValueType for $ty {
            fn extract(value: &Value) -> Option<Self> {
                value.as_int().and_then(|i| <$ty>::try_from(i).ok())
            }
        }
    )*};
}

narrow_int_value_type!(i8, i16, i32, u8, u16, u32);

impl ValueType for f64 {
    fn extract(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl ValueType for String {
    fn extract(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl ValueType for PaymentCardType {
    fn extract(value: &Value) -> Option<Self> {
        value.as_card()
    }
}

impl<T: ValueType> ValueType for Vec<T> {
    fn extract(value: &Value) -> Option<Self> {
        value.as_list()?.iter().map(T::extract).collect()
    }
}

#[cfg(feature = "temporal")]
impl ValueType for chrono::DateTime<chrono::Utc> {
    fn extract(value: &Value) -> Option<Self> {
        value.as_date_time()
    }
}

// ============================================================================
// TESTS
// ============================================================================
