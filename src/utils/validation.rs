use crate::utils::error::{PrimeError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// 輸入欄位的預設長度上限（0–99999）
pub const DEFAULT_MAX_DIGITS: usize = 5;

/// 可設定的位數上限：試除法為 O(b·√b)，圖表每個整數佔一個點，
/// 6 位數（999999）仍可即時完成
pub const MAX_SUPPORTED_DIGITS: usize = 6;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("digit pattern is valid"))
}

/// 檢查輸入是否只包含數字，並且不超過長度上限，回傳解析後的 bound
///
/// The raw value is matched as-is: surrounding whitespace is rejected like
/// any other non-digit character.
pub fn parse_bound(input: &str, max_digits: usize) -> Result<i64> {
    if input.is_empty() {
        return Err(PrimeError::EmptyInput);
    }

    if !digits_pattern().is_match(input) {
        return Err(PrimeError::InvalidInput {
            input: input.to_string(),
            reason: "only the digits 0-9 are allowed".to_string(),
        });
    }

    if input.len() > max_digits {
        return Err(PrimeError::InputTooLong {
            input: input.to_string(),
            max_digits,
        });
    }

    input.parse::<i64>().map_err(|e| PrimeError::InvalidInput {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PrimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_max_digits(field_name: &str, max_digits: usize) -> Result<()> {
    validate_range(field_name, max_digits, 1, MAX_SUPPORTED_DIGITS)
}
