//! Slices a [`DailySeries`] into fixed-size table pages.

use crate::pagination::page_size::PageSize;
use crate::types::metric::DailyMetric;
use crate::types::series::{DailyRecord, DailySeries};
use chrono::NaiveDate;
use std::fmt;

/// Maximum number of page links shown at once.
const NAVIGABLE_PAGE_COUNT: usize = 5;
/// Pages kept on each side of the current page when the link window slides.
const NAVIGABLE_PAGE_RADIUS: usize = NAVIGABLE_PAGE_COUNT / 2;

const UNAVAILABLE: &str = "N/A";
const TABLE_DATE_FORMAT: &str = "%b %d, %Y";

/// A table cell for one metric on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricCell {
    Observed(f64),
    /// The archive had no value for this day. Never shown as zero.
    Unavailable,
}

impl From<Option<f64>> for MetricCell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(MetricCell::Unavailable, MetricCell::Observed)
    }
}

/// One decimal place, or `N/A`.
impl fmt::Display for MetricCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricCell::Observed(value) => write!(f, "{value:.1}"),
            MetricCell::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// A table row: the date plus one cell per metric in [`DailyMetric::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// 1-based position of the row in the whole series.
    pub ordinal: usize,
    pub date: NaiveDate,
    pub cells: Vec<(DailyMetric, MetricCell)>,
}

impl RowView {
    fn new(ordinal: usize, record: &DailyRecord) -> Self {
        Self {
            ordinal,
            date: record.date,
            cells: DailyMetric::ALL
                .iter()
                .map(|&metric| (metric, record.value(metric).into()))
                .collect(),
        }
    }

    pub fn formatted_date(&self) -> String {
        format_table_date(self.date)
    }
}

/// Renders a date the way the table shows it, e.g. `Jan 01, 2024`.
pub fn format_table_date(date: NaiveDate) -> String {
    date.format(TABLE_DATE_FORMAT).to_string()
}

/// Everything needed to draw one page of the table and its pagination bar.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    /// The page actually shown, after clamping the requested one.
    pub page_index: usize,
    pub page_size: PageSize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based ordinal of the first visible row, 0 when there are no rows.
    pub first_item_ordinal: usize,
    /// 1-based ordinal of the last visible row, 0 when there are no rows.
    pub last_item_ordinal: usize,
    pub visible_rows: Vec<RowView>,
    pub navigable_pages: Vec<usize>,
    pub show_leading_ellipsis: bool,
    pub show_trailing_ellipsis: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    /// "Showing 11 to 20 of 25 entries"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first_item_ordinal, self.last_item_ordinal, self.total_items
        )
    }
}

/// Number of pages needed for `total_items` rows, 0 for an empty series.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Clamps a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page_index: usize, total_pages: usize) -> usize {
    page_index.clamp(1, total_pages.max(1))
}

/// Computes the visible page of `series`.
///
/// Out-of-range page indices are clamped, never rejected. The result depends
/// only on the arguments.
///
/// # Examples
///
/// ```
/// use chrono::{Days, NaiveDate};
/// use weather_archive::{window, DailyRecord, DailySeries, PageSize};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let records = (0..25)
///     .map(|i| DailyRecord::empty(start + Days::new(i)))
///     .collect();
/// let series = DailySeries::try_from_records(records).unwrap();
///
/// let last = window(&series, PageSize::Ten, 3);
/// assert_eq!((last.first_item_ordinal, last.last_item_ordinal), (21, 25));
/// assert_eq!(last.total_pages, 3);
/// assert_eq!(last.navigable_pages, vec![1, 2, 3]);
/// ```
pub fn window(series: &DailySeries, page_size: PageSize, page_index: usize) -> PageWindow {
    let total_items = series.len();
    let total_pages = total_pages(total_items, page_size);
    let page_index = clamp_page(page_index, total_pages);

    let (first_item_ordinal, last_item_ordinal) = if total_items == 0 {
        (0, 0)
    } else {
        (
            (page_index - 1) * page_size.get() + 1,
            (page_index * page_size.get()).min(total_items),
        )
    };

    let visible_rows = if total_items == 0 {
        Vec::new()
    } else {
        series.records()[first_item_ordinal - 1..last_item_ordinal]
            .iter()
            .zip(first_item_ordinal..)
            .map(|(record, ordinal)| RowView::new(ordinal, record))
            .collect()
    };

    let navigable_pages = navigable_pages(page_index, total_pages);
    let sliding = total_pages > NAVIGABLE_PAGE_COUNT;

    PageWindow {
        page_index,
        page_size,
        total_items,
        total_pages,
        first_item_ordinal,
        last_item_ordinal,
        visible_rows,
        navigable_pages,
        show_leading_ellipsis: sliding && page_index > NAVIGABLE_PAGE_RADIUS + 1,
        show_trailing_ellipsis: sliding && page_index + NAVIGABLE_PAGE_RADIUS < total_pages,
        has_previous: page_index > 1,
        has_next: page_index < total_pages,
    }
}

/// Page links to show: all pages when there are few, otherwise five pages
/// pinned to the start, pinned to the end, or centred on `page_index`.
fn navigable_pages(page_index: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= NAVIGABLE_PAGE_COUNT {
        return (1..=total_pages).collect();
    }
    let first = if page_index <= NAVIGABLE_PAGE_RADIUS + 1 {
        1
    } else if page_index + NAVIGABLE_PAGE_RADIUS >= total_pages {
        total_pages + 1 - NAVIGABLE_PAGE_COUNT
    } else {
        page_index - NAVIGABLE_PAGE_RADIUS
    };
    (first..first + NAVIGABLE_PAGE_COUNT).collect()
}
