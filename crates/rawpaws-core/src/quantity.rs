//! 數量取整與格式化

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 百分比基數
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// 四捨五入到整數（.5 遠離零）
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// 四捨五入到指定小數位
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// 取百分比：`value * pct / 100`
pub fn percent_of(value: Decimal, pct: Decimal) -> Decimal {
    value * pct / HUNDRED
}

/// 截去小數部分後轉為整數天數
pub fn truncate_days(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(i64::MAX)
}

/// 固定小數位輸出
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, round_to(value, dp))
}
