use crate::error::{CrossError, Result};
use crate::prelude::*;
use std::io::Read;

#[derive(Clone, Copy)]
struct Columns {
    parent: usize,
    trait_name: usize,
    genotype: usize,
}

/// Produces Observations from delimited `parent,trait,genotype` rows.
///
/// `Csv` implements Iterator so it can be passed
/// directly to `Parents::observe()`
pub struct Csv {
    records: std::iter::Enumerate<csv::StringRecordsIntoIter<Box<dyn Read>>>,
    columns: Columns,
}

impl Csv {
    fn new(records: csv::StringRecordsIntoIter<Box<dyn Read>>, columns: Columns) -> Self {
        Self {
            records: records.enumerate(),
            columns,
        }
    }

    fn parse(&self, row: &csv::StringRecord, line: usize) -> Result<Observation> {
        let field = |idx: usize, what: &str| {
            row.get(idx).ok_or_else(|| {
                CrossError::MalformedSelection(format!("row {} has no {} column", line, what))
            })
        };
        Ok(Observation {
            parent: field(self.columns.parent, "parent")?.parse()?,
            trait_name: Trait::new(field(self.columns.trait_name, "trait")?.trim()),
            genotype: field(self.columns.genotype, "genotype")?.parse()?,
        })
    }
}

impl Iterator for Csv {
    type Item = Result<Observation>;

    fn next(&mut self) -> Option<Result<Observation>> {
        loop {
            let (idx, row) = self.records.next()?;
            let row = match row {
                Ok(row) => row,
                Err(e) => return Some(Err(e.into())),
            };
            if row.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            return Some(self.parse(&row, idx + 1));
        }
    }
}

pub struct CsvBuilder {
    headers: bool,
    delimiter: u8,
    parent_field: String,
    trait_field: String,
    genotype_field: String,
}

impl CsvBuilder {
    /// Construct a new Csv builder
    pub fn new() -> Self {
        Self {
            headers: true,
            delimiter: b',',
            parent_field: "parent".to_owned(),
            trait_field: "trait".to_owned(),
            genotype_field: "genotype".to_owned(),
        }
    }

    /// Without headers the columns are read as parent, trait, genotype.
    pub fn headers(&mut self, headers: bool) -> &mut Self {
        self.headers = headers;
        self
    }

    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    pub fn parent_field(&mut self, parent_field: &str) -> &mut Self {
        self.parent_field = parent_field.to_owned();
        self
    }

    pub fn trait_field(&mut self, trait_field: &str) -> &mut Self {
        self.trait_field = trait_field.to_owned();
        self
    }

    pub fn genotype_field(&mut self, genotype_field: &str) -> &mut Self {
        self.genotype_field = genotype_field.to_owned();
        self
    }

    pub fn from_reader(&self, reader: Box<dyn Read>) -> Result<Csv> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(self.headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let columns = if self.headers {
            let headers = rdr.headers()?;
            let position = |name: &str| {
                headers
                    .iter()
                    .position(|h| h.eq_ignore_ascii_case(name))
                    .ok_or_else(|| {
                        CrossError::MalformedSelection(format!("missing column {:?}", name))
                    })
            };
            Columns {
                parent: position(&self.parent_field)?,
                trait_name: position(&self.trait_field)?,
                genotype: position(&self.genotype_field)?,
            }
        } else {
            Columns {
                parent: 0,
                trait_name: 1,
                genotype: 2,
            }
        };

        Ok(Csv::new(rdr.into_records(), columns))
    }
}

impl Default for CsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `TRAIT=GENOTYPE` pairs given for one parent.
pub fn assignments<I, S>(parent: Parent, pairs: I) -> impl Iterator<Item = Result<Observation>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pairs.into_iter().map(move |pair| {
        let pair = pair.as_ref();
        let (trait_name, genotype) = pair.rsplit_once('=').ok_or_else(|| {
            CrossError::MalformedSelection(format!("expected TRAIT=GENOTYPE, got {:?}", pair))
        })?;
        Ok(Observation {
            parent,
            trait_name: Trait::new(trait_name.trim()),
            genotype: genotype.parse()?,
        })
    })
}
