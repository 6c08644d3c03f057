//! 日曆工具
//!
//! 所有依賴「今天」的計算都透過 [`Clock`] 注入，方便測試固定日期。

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::{DietError, Result};

/// 提供當前日期
pub trait Clock {
    /// 今天的日期
    fn today(&self) -> NaiveDate;
}

/// 系統時鐘（本地時區）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日期時鐘
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// 創建固定於指定日期的時鐘
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// 將時鐘撥到另一天
    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// 計算兩個日期之間的完整月數
///
/// 若今天的日數小於起始日的日數，則該月尚未滿，扣減一個月。
pub fn whole_months_between(from: NaiveDate, today: NaiveDate) -> i32 {
    let mut months = (today.year() - from.year()) * 12 + today.month() as i32 - from.month() as i32;
    if today.day() < from.day() {
        months -= 1;
    }
    months
}

/// 日期加上天數
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| DietError::InvalidDate(format!("{date} + {days} 天溢出")))
}

/// 計算兩個日期相差的天數（`to - from`）
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
