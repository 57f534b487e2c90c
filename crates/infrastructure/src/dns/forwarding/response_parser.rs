use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use ripple_domain::DomainError;
use std::net::Ipv4Addr;
use tracing::debug;

/// The parts of a response the referral walk and the checkers look at.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    pub authoritative: bool,
    pub truncated: bool,
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl DnsResponse {
    /// NS target names from the answer section, or from the authority
    /// section when the answer has none.
    pub fn nameserver_names(&self) -> Vec<Name> {
        let from_answers = ns_targets(&self.answers);
        if from_answers.is_empty() {
            ns_targets(&self.authority)
        } else {
            from_answers
        }
    }

    /// NS target names of a referral.
    pub fn referral_names(&self) -> Vec<Name> {
        ns_targets(&self.authority)
    }

    /// IPv4 glue for `name` from the additional section.
    pub fn glue_for(&self, name: &Name) -> Option<Ipv4Addr> {
        self.additionals.iter().find_map(|record| match record.data() {
            RData::A(a) if record.name() == name => Some(a.0),
            _ => None,
        })
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

fn ns_targets(records: &[Record]) -> Vec<Name> {
    records
        .iter()
        .filter_map(|record| match record.data() {
            RData::NS(ns) => Some(ns.0.clone()),
            _ => None,
        })
        .collect()
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let mut message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "message is not a response".into(),
            ));
        }

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            authoritative: message.authoritative(),
            truncated: message.truncated(),
            answers: message.take_answers(),
            authority: message.take_name_servers(),
            additionals: message.take_additionals(),
        };

        debug!(
            id = response.id,
            rcode = ?response.rcode,
            authoritative = response.authoritative,
            truncated = response.truncated,
            answers = response.answers.len(),
            authority = response.authority.len(),
            additionals = response.additionals.len(),
            "DNS response parsed"
        );

        Ok(response)
    }
}
