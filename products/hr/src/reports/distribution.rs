use std::fmt::Write as _;

use platform_api::ApiResult;
use sea_orm::{ConnectionTrait, FromQueryResult};
use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::instrument;

use crate::sql::statement;

/// Fixed, contiguous salary bands. Lower bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SalaryBand {
    Under3000,
    From3000To4999,
    From5000To6999,
    From7000To8999,
    From9000,
}

impl SalaryBand {
    pub const ALL: [SalaryBand; 5] = [
        SalaryBand::Under3000,
        SalaryBand::From3000To4999,
        SalaryBand::From5000To6999,
        SalaryBand::From7000To8999,
        SalaryBand::From9000,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SalaryBand::Under3000 => "<3000",
            SalaryBand::From3000To4999 => "3000-4999",
            SalaryBand::From5000To6999 => "5000-6999",
            SalaryBand::From7000To8999 => "7000-8999",
            SalaryBand::From9000 => "9000+",
        }
    }

    /// Exclusive upper bound in cents; `None` for the open-ended top band.
    pub fn upper_cents(self) -> Option<i64> {
        match self {
            SalaryBand::Under3000 => Some(300_000),
            SalaryBand::From3000To4999 => Some(500_000),
            SalaryBand::From5000To6999 => Some(700_000),
            SalaryBand::From7000To8999 => Some(900_000),
            SalaryBand::From9000 => None,
        }
    }

    pub fn for_salary_cents(cents: i64) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| band.upper_cents().is_none_or(|upper| cents < upper))
            .unwrap_or(SalaryBand::From9000)
    }

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// `CASE` expression mapping `e.base_salary_cents` to the band index.
    fn case_sql() -> String {
        let mut sql = String::from("CASE");
        for band in Self::ALL {
            if let Some(upper) = band.upper_cents() {
                let _ = write!(
                    sql,
                    " WHEN e.base_salary_cents < {upper} THEN {}",
                    band.index()
                );
            }
        }
        let _ = write!(sql, " ELSE {} END", SalaryBand::From9000.index());
        sql
    }
}

/// Employee counts per band. Every band is always present, zero included,
/// and serializes in band order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalaryDistribution {
    counts: [i64; 5],
}

impl SalaryDistribution {
    pub fn count(&self, band: SalaryBand) -> i64 {
        self.counts[band.index()]
    }

    pub fn total(&self) -> i64 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SalaryBand, i64)> + '_ {
        SalaryBand::ALL
            .into_iter()
            .map(|band| (band, self.count(band)))
    }

    fn add(&mut self, band: SalaryBand, count: i64) {
        self.counts[band.index()] += count;
    }
}

impl Serialize for SalaryDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SalaryBand::ALL.len()))?;
        for (band, count) in self.iter() {
            map.serialize_entry(band.label(), &count)?;
        }
        map.end()
    }
}

#[derive(Debug, FromQueryResult)]
struct BandRow {
    band: i64,
    count: i64,
}

#[instrument(name = "hr.reports.salary_distribution", skip(db))]
pub async fn salary_distribution<C: ConnectionTrait>(db: &C) -> ApiResult<SalaryDistribution> {
    let sql = format!(
        "SELECT CAST({} AS BIGINT) AS band, COUNT(*) AS count \
         FROM employee e GROUP BY 1",
        SalaryBand::case_sql()
    );
    let rows = BandRow::find_by_statement(statement(db, sql))
        .all(db)
        .await?;
    let mut distribution = SalaryDistribution::default();
    for row in rows {
        if let Some(band) = SalaryBand::from_index(row.band) {
            distribution.add(band, row.count);
        }
    }
    Ok(distribution)
}
