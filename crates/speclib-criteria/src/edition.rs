//! Design code editions and unit systems.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::module::stored_enum;

/// Governing edition of the design specification, in publication order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Edition {
    FirstEdition1994,
    FirstEditionWith1996Interims,
    FirstEditionWith1997Interims,
    SecondEdition1998,
    SecondEditionWith1999Interims,
    SecondEditionWith2000Interims,
    SecondEditionWith2001Interims,
    SecondEditionWith2002Interims,
    SecondEditionWith2003Interims,
    ThirdEdition2004,
    ThirdEditionWith2005Interims,
    ThirdEditionWith2006Interims,
    FourthEdition2007,
    FourthEditionWith2008Interims,
    FourthEditionWith2009Interims,
    FifthEdition2010,
    SixthEdition2012,
    SixthEditionWith2013Interims,
    SeventhEdition2014,
    SeventhEditionWith2015Interims,
    SeventhEditionWith2016Interims,
    EighthEdition2017,
    NinthEdition2020,
    TenthEdition2024,
}

impl Edition {
    /// Every edition, oldest first.
    pub const ALL: [Edition; 24] = [
        Edition::FirstEdition1994,
        Edition::FirstEditionWith1996Interims,
        Edition::FirstEditionWith1997Interims,
        Edition::SecondEdition1998,
        Edition::SecondEditionWith1999Interims,
        Edition::SecondEditionWith2000Interims,
        Edition::SecondEditionWith2001Interims,
        Edition::SecondEditionWith2002Interims,
        Edition::SecondEditionWith2003Interims,
        Edition::ThirdEdition2004,
        Edition::ThirdEditionWith2005Interims,
        Edition::ThirdEditionWith2006Interims,
        Edition::FourthEdition2007,
        Edition::FourthEditionWith2008Interims,
        Edition::FourthEditionWith2009Interims,
        Edition::FifthEdition2010,
        Edition::SixthEdition2012,
        Edition::SixthEditionWith2013Interims,
        Edition::SeventhEdition2014,
        Edition::SeventhEditionWith2015Interims,
        Edition::SeventhEditionWith2016Interims,
        Edition::EighthEdition2017,
        Edition::NinthEdition2020,
        Edition::TenthEdition2024,
    ];

    /// The newest edition this build knows about.
    pub const LATEST: Edition = Edition::TenthEdition2024;

    /// Year of publication, unique per edition.
    pub fn year(self) -> u16 {
        use Edition::*;
        match self {
            FirstEdition1994 => 1994,
            FirstEditionWith1996Interims => 1996,
            FirstEditionWith1997Interims => 1997,
            SecondEdition1998 => 1998,
            SecondEditionWith1999Interims => 1999,
            SecondEditionWith2000Interims => 2000,
            SecondEditionWith2001Interims => 2001,
            SecondEditionWith2002Interims => 2002,
            SecondEditionWith2003Interims => 2003,
            ThirdEdition2004 => 2004,
            ThirdEditionWith2005Interims => 2005,
            ThirdEditionWith2006Interims => 2006,
            FourthEdition2007 => 2007,
            FourthEditionWith2008Interims => 2008,
            FourthEditionWith2009Interims => 2009,
            FifthEdition2010 => 2010,
            SixthEdition2012 => 2012,
            SixthEditionWith2013Interims => 2013,
            SeventhEdition2014 => 2014,
            SeventhEditionWith2015Interims => 2015,
            SeventhEditionWith2016Interims => 2016,
            EighthEdition2017 => 2017,
            NinthEdition2020 => 2020,
            TenthEdition2024 => 2024,
        }
    }

    /// Persisted key, e.g. `AashtoLrfd2020`.
    pub fn key(self) -> String {
        format!("AashtoLrfd{}", self.year())
    }

    /// Parse a persisted key.
    pub fn from_key(key: &str) -> Option<Edition> {
        let year: u16 = key.strip_prefix("AashtoLrfd")?.parse().ok()?;
        Self::ALL.into_iter().find(|e| e.year() == year)
    }

    /// Human-readable name.
    pub fn name(self) -> String {
        use Edition::*;
        let (ordinal, base) = match self {
            FirstEdition1994 | FirstEditionWith1996Interims | FirstEditionWith1997Interims => {
                ("1st", 1994)
            }
            SecondEdition1998
            | SecondEditionWith1999Interims
            | SecondEditionWith2000Interims
            | SecondEditionWith2001Interims
            | SecondEditionWith2002Interims
            | SecondEditionWith2003Interims => ("2nd", 1998),
            ThirdEdition2004 | ThirdEditionWith2005Interims | ThirdEditionWith2006Interims => {
                ("3rd", 2004)
            }
            FourthEdition2007 | FourthEditionWith2008Interims | FourthEditionWith2009Interims => {
                ("4th", 2007)
            }
            FifthEdition2010 => ("5th", 2010),
            SixthEdition2012 | SixthEditionWith2013Interims => ("6th", 2012),
            SeventhEdition2014 | SeventhEditionWith2015Interims | SeventhEditionWith2016Interims => {
                ("7th", 2014)
            }
            EighthEdition2017 => ("8th", 2017),
            NinthEdition2020 => ("9th", 2020),
            TenthEdition2024 => ("10th", 2024),
        };
        if self.year() == base {
            format!("AASHTO LRFD Bridge Design Specifications, {ordinal} Edition, {base}")
        } else {
            format!(
                "AASHTO LRFD Bridge Design Specifications, {ordinal} Edition, {base} with {} interim provisions",
                self.year()
            )
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

stored_enum! {
    /// Unit system a specification is written in.
    pub enum Units {
        SI = 0 => "SI",
        #[default]
        US = 1 => "US",
    }
}
