// src/model.rs
//
// Records flowing through one run:
//
//   listing page  -> MunicipalityRef      (code, name, detail link)
//   detail page   -> SummaryStats + PartyVotes
//   merged        -> MunicipalityResult   (held in memory until export)
//
// All values stay as the text found on the page; nothing is parsed to numbers.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MunicipalityRef {
    pub code: String,
    pub name: String,
    pub detail_url: String,
}

/// Empty string = marker cell not found on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub eligible_voters: String,
    pub envelopes_issued: String,
    pub valid_votes: String,
}

/// Party name -> vote count, in the order the parties appear on the page.
/// Re-inserting a name replaces its count in place (last one wins).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartyVotes {
    entries: Vec<(String, String)>,
}

impl PartyVotes {
    pub fn new() -> Self { Self::default() }

    /// Returns the previous count if `party` was already present.
    pub fn insert(&mut self, party: String, votes: String) -> Option<String> {
        match self.entries.iter_mut().find(|(p, _)| *p == party) {
            Some((_, v)) => Some(std::mem::replace(v, votes)),
            None => {
                self.entries.push((party, votes));
                None
            }
        }
    }

    pub fn get(&self, party: &str) -> Option<&str> {
        self.entries.iter().find(|(p, _)| p == party).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PartyVotes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = PartyVotes::new();
        for (k, v) in iter {
            out.insert(k.into(), v.into());
        }
        out
    }
}

/// One output row before column normalisation. The five fixed fields are
/// always present; the party set differs from municipality to municipality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MunicipalityResult {
    pub code: String,
    pub name: String,
    pub summary: SummaryStats,
    pub parties: PartyVotes,
}

impl MunicipalityResult {
    pub fn new(muni: &MunicipalityRef, summary: SummaryStats, parties: PartyVotes) -> Self {
        Self {
            code: muni.code.clone(),
            name: muni.name.clone(),
            summary,
            parties,
        }
    }

    /// Fixed fields in the order of `FIXED_COLUMNS`.
    pub fn fixed_values(&self) -> [&str; 5] {
        [
            self.code.as_str(),
            self.name.as_str(),
            self.summary.eligible_voters.as_str(),
            self.summary.envelopes_issued.as_str(),
            self.summary.valid_votes.as_str(),
        ]
    }

    /// Votes for `party`, or None if the party was not on this page.
    pub fn votes(&self, party: &str) -> Option<&str> {
        self.parties.get(party)
    }
}
