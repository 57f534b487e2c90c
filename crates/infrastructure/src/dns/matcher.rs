use hickory_proto::rr::{RData, Record};
use ripple_domain::{MatchCriteria, RecordType};

/// Decides whether a set of decoded records holds the value being checked
/// for, and renders the first match for display.
///
/// | type  | rule                                   | rendered as               |
/// |-------|----------------------------------------|---------------------------|
/// | A     | address text equals the value          | `A 192.0.2.1`             |
/// | AAAA  | address text equals the value          | `AAAA 2001:db8::1`        |
/// | TXT   | joined character-strings contain value | the joined text           |
/// | CNAME | target name contains value             | `CNAME target.example.`   |
/// | MX    | exchange host contains value           | `MX mx.example. (pref 10)`|
pub struct RecordMatcher;

impl RecordMatcher {
    pub fn find_match(records: &[Record], criteria: &MatchCriteria) -> Option<String> {
        records
            .iter()
            .find_map(|record| Self::match_rdata(record.data(), criteria))
    }

    /// Records of any other type than the one asked for never match.
    pub fn match_rdata(data: &RData, criteria: &MatchCriteria) -> Option<String> {
        match (criteria.record_type, data) {
            (RecordType::A, RData::A(a)) => {
                let text = a.0.to_string();
                criteria.accepts(&text).then(|| format!("A {}", text))
            }
            (RecordType::AAAA, RData::AAAA(aaaa)) => {
                let text = aaaa.0.to_string();
                criteria.accepts(&text).then(|| format!("AAAA {}", text))
            }
            (RecordType::TXT, RData::TXT(txt)) => {
                let joined: String = txt
                    .txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment))
                    .collect();
                criteria.accepts(&joined).then_some(joined)
            }
            (RecordType::CNAME, RData::CNAME(cname)) => {
                let target = cname.0.to_utf8();
                criteria.accepts(&target).then(|| format!("CNAME {}", target))
            }
            (RecordType::MX, RData::MX(mx)) => {
                let host = mx.exchange().to_utf8();
                criteria
                    .accepts(&host)
                    .then(|| format!("MX {} (pref {})", host, mx.preference()))
            }
            _ => None,
        }
    }
}
