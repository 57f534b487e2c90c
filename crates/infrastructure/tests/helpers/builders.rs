#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, MX, NS, TXT};
use hickory_proto::rr::{Name, RData, Record};
use ripple_infrastructure::dns::forwarding::DnsResponse;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn addr(s: &str) -> SocketAddr {
    s.parse().unwrap()
}

pub fn ns_record(zone: &str, target: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(target))))
}

pub fn a_record(owner: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
}

pub fn txt_record(owner: &str, segments: &[&str]) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::TXT(TXT::new(segments.iter().map(|s| s.to_string()).collect())),
    )
}

pub fn mx_record(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::MX(MX::new(preference, name(exchange))))
}

fn empty_response() -> DnsResponse {
    DnsResponse {
        id: 0,
        rcode: ResponseCode::NoError,
        authoritative: false,
        truncated: false,
        answers: Vec::new(),
        authority: Vec::new(),
        additionals: Vec::new(),
    }
}

/// Non-authoritative referral with NS records in the authority section and
/// optional A glue.
pub fn referral(zone: &str, nameservers: &[&str], glue: &[(&str, [u8; 4])]) -> DnsResponse {
    DnsResponse {
        authority: nameservers.iter().map(|ns| ns_record(zone, ns)).collect(),
        additionals: glue.iter().map(|(owner, ip)| a_record(owner, *ip)).collect(),
        ..empty_response()
    }
}

/// Authoritative reply carrying `answers`.
pub fn authoritative(answers: Vec<Record>) -> DnsResponse {
    DnsResponse {
        authoritative: true,
        answers,
        ..empty_response()
    }
}

/// Authoritative NS answer with glue for every name.
pub fn authoritative_ns(zone: &str, nameservers: &[(&str, [u8; 4])]) -> DnsResponse {
    DnsResponse {
        authoritative: true,
        answers: nameservers.iter().map(|(ns, _)| ns_record(zone, ns)).collect(),
        additionals: nameservers.iter().map(|(ns, ip)| a_record(ns, *ip)).collect(),
        ..empty_response()
    }
}

/// Wire-level reply skeleton echoing the question of `query`.
pub fn reply_to(query: &Message) -> Message {
    let mut message = Message::new();
    message
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(query.recursion_desired())
        .set_recursion_available(true);
    for q in query.queries() {
        message.add_query(q.clone());
    }
    message
}
