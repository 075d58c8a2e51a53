use std::io::{self, Write};

const DELIMITER: char = ';';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Aggregate {
    Mean,
    Median,
}

impl Aggregate {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mean => "average",
            Self::Median => "med",
        }
    }

    /// Integer mean, or the middle run (mean of the two middles for even counts).
    pub fn apply(self, times: &[u128]) -> u128 {
        if times.is_empty() {
            return 0;
        }
        match self {
            Self::Mean => times.iter().sum::<u128>() / times.len() as u128,
            Self::Median => {
                let mut sorted = times.to_vec();
                sorted.sort_unstable();
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 1 {
                    sorted[mid]
                } else {
                    (sorted[mid - 1] + sorted[mid]) / 2
                }
            }
        }
    }
}

/// `;`-delimited timing table: one row per size (and threshold), one column
/// per run, then the aggregate.
pub struct TableWriter<W: Write> {
    out: W,
    runs: usize,
    aggregate: Aggregate,
    with_threshold: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W, runs: usize, aggregate: Aggregate, with_threshold: bool) -> Self {
        Self {
            out,
            runs,
            aggregate,
            with_threshold,
        }
    }

    pub fn header(&self) -> String {
        let mut columns = vec![String::from("size")];
        if self.with_threshold {
            columns.push(String::from("threshold"));
        }
        columns.extend((1..=self.runs).map(|i| format!("time_run{i}_us")));
        columns.push(format!("{}_us", self.aggregate.label()));
        columns.join(&DELIMITER.to_string())
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        let header = self.header();
        writeln!(self.out, "{header}")
    }

    pub fn write_row(
        &mut self,
        size: usize,
        threshold: Option<usize>,
        times: &[u128],
    ) -> io::Result<()> {
        debug_assert_eq!(times.len(), self.runs);
        debug_assert_eq!(threshold.is_some(), self.with_threshold);

        write!(self.out, "{size}")?;
        if let Some(threshold) = threshold {
            write!(self.out, "{DELIMITER}{threshold}")?;
        }
        for time in times {
            write!(self.out, "{DELIMITER}{time}")?;
        }
        writeln!(self.out, "{DELIMITER}{}", self.aggregate.apply(times))
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
