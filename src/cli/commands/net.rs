use crate::errors::AppResult;
use crate::net::{ips_match, is_punycode, Ipv4Prefix};
use clap::Args;
use std::net::Ipv4Addr;

/// Check whether an IPv4 address lies inside a prefix
#[derive(Args)]
pub struct NetMatchCommand {
    /// Address to test
    pub ip: Ipv4Addr,

    /// Network in a.b.c.d/bits form (a bare address means /32)
    pub prefix: Ipv4Prefix,

    /// Second flow endpoint; matches if either address is inside the prefix
    #[arg(long)]
    pub peer: Option<Ipv4Addr>,
}

impl NetMatchCommand {
    pub fn run(&self) -> AppResult<()> {
        let matched = self.matches();
        match self.peer {
            Some(peer) => println!("{} <-> {} in {}: {}", self.ip, peer, self.prefix, matched),
            None => println!("{} in {}: {}", self.ip, self.prefix, matched),
        }
        Ok(())
    }

    fn matches(&self) -> bool {
        match self.peer {
            Some(peer) => ips_match(self.ip, peer, self.prefix.net, self.prefix.bits),
            None => self.prefix.contains(self.ip),
        }
    }
}

/// Check whether a host name contains a punycode label
#[derive(Args)]
pub struct PunycodeCommand {
    /// Host name to test
    pub host: String,
}

impl PunycodeCommand {
    pub fn run(&self) -> AppResult<()> {
        println!("{}: {}", self.host, is_punycode(self.host.as_bytes()));
        Ok(())
    }
}
