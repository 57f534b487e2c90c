use ripple_domain::{
    format_found_after, Endpoint, ProgressEvent, PropagationReport, RecordType, RunConfig,
    ServerStatus, TargetKind,
};
use std::io::{self, Write};

/// Renders a run's progress as plain lines for a terminal.
pub struct ConsolePrinter<W: Write> {
    out: W,
    record_type: RecordType,
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W, record_type: RecordType) -> Self {
        Self { out, record_type }
    }

    pub fn header(&mut self, run: &RunConfig) -> io::Result<()> {
        writeln!(
            self.out,
            "Testing DNS propagation for {} ({}={})",
            run.display_domain(),
            run.criteria.record_type,
            run.criteria.value
        )?;
        writeln!(
            self.out,
            "Retry interval: {}, Max duration: {}\n",
            humantime::format_duration(run.poll_interval),
            humantime::format_duration(run.deadline)
        )?;
        writeln!(self.out, "=== Discovering authoritative nameservers ===")?;
        self.out.flush()
    }

    pub fn event(&mut self, event: &ProgressEvent) -> io::Result<()> {
        match event {
            ProgressEvent::Discovered { authoritative } => {
                writeln!(
                    self.out,
                    "Found {} authoritative nameservers:",
                    authoritative.len()
                )?;
                self.endpoints(authoritative)?;
            }
            ProgressEvent::ResolversInitialized { resolvers } => {
                writeln!(self.out, "Watching {} resolvers:", resolvers.len())?;
                self.endpoints(resolvers)?;
                writeln!(self.out, "=== Checking for propagation ===")?;
            }
            ProgressEvent::TargetPropagated {
                kind: TargetKind::Authoritative,
                endpoint,
                matched_record,
                found_after,
            } => writeln!(
                self.out,
                " - {} authoritative {} has record {} ({})",
                format_found_after(*found_after),
                endpoint.name,
                self.record_type,
                matched_record
            )?,
            ProgressEvent::TargetPropagated {
                kind: TargetKind::Resolver,
                endpoint,
                matched_record,
                found_after,
            } => writeln!(
                self.out,
                " - {} resolver {} propagated record {} ({})",
                format_found_after(*found_after),
                endpoint.name,
                self.record_type,
                matched_record
            )?,
            ProgressEvent::Complete { elapsed } => writeln!(
                self.out,
                "\nAll servers propagated after {}!",
                format_found_after(*elapsed)
            )?,
            ProgressEvent::Timeout { elapsed } => writeln!(
                self.out,
                "\nTimeout reached after {}",
                format_found_after(*elapsed)
            )?,
            ProgressEvent::Cancelled => writeln!(self.out, "\nCancelled")?,
            ProgressEvent::Error { message } => writeln!(self.out, "Error: {}", message)?,
        }
        self.out.flush()
    }

    pub fn summary(&mut self, report: &PropagationReport) -> io::Result<()> {
        self.summary_section("authoritative", &report.authoritative)?;
        self.summary_section("resolver", &report.resolvers)?;
        let (done, total) = report.propagated_count();
        writeln!(self.out, "\n{}/{} servers propagated", done, total)?;
        self.out.flush()
    }

    fn endpoints(&mut self, endpoints: &[Endpoint]) -> io::Result<()> {
        for endpoint in endpoints {
            writeln!(self.out, "  - {}", endpoint)?;
        }
        writeln!(self.out)
    }

    fn summary_section(&mut self, label: &str, servers: &[ServerStatus]) -> io::Result<()> {
        writeln!(self.out, "\nSummary ({}):", label)?;
        for server in servers {
            match (&server.found_after, &server.record) {
                (Some(found_after), Some(record)) if server.propagated => writeln!(
                    self.out,
                    " - {}: propagated at {} ({})",
                    server.name, found_after, record
                )?,
                _ => writeln!(self.out, " - {}: NOT propagated", server.name)?,
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
