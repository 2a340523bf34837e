//! TLS, address and host-name helpers

use payload_inspect::net::{ips_match, is_punycode, net_match, Ipv4Prefix};
use payload_inspect::tls::{cipher_name, cipher_strength, tls_version_label, CipherStrength};
use payload_inspect::utils::SymbolTree;
use std::net::Ipv4Addr;

#[test]
fn test_cipher_lookups() {
    assert_eq!(cipher_name(0xc02f), "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
    assert_eq!(cipher_strength(0xc02f), CipherStrength::Safe);
    assert_eq!(cipher_strength(0x0005), CipherStrength::Insecure);
    assert_eq!(cipher_strength(0x000a), CipherStrength::Weak);
    assert_eq!(cipher_name(0xabcd), "0XABCD");
}

#[test]
fn test_version_labels() {
    assert_eq!(tls_version_label(0x0303).name, "TLSv1.2");
    assert!(tls_version_label(0x7f12).known);
    let unknown = tls_version_label(0x1234);
    assert!(!unknown.known);
    assert_eq!(unknown.name, "TLS (1234)");
}

#[test]
fn test_prefix_matching() {
    let prefix: Ipv4Prefix = "10.20.0.0/16".parse().unwrap();
    let inside = Ipv4Addr::new(10, 20, 30, 40);
    let outside = Ipv4Addr::new(10, 21, 0, 1);

    assert!(prefix.contains(inside));
    assert!(!prefix.contains(outside));
    assert!(net_match(outside, prefix.net, 0));
    assert!(ips_match(outside, inside, prefix.net, prefix.bits));
}

#[test]
fn test_punycode_hosts() {
    assert!(is_punycode(b"www.xn--80ak6aa92e.com"));
    assert!(!is_punycode(b"www.XN--80AK6AA92E.com"));
    assert!(!is_punycode(b"example.com"));
    assert!(!is_punycode(b"xn-"));
}

#[test]
fn test_symbol_tree_as_host_table() {
    let mut hosts: SymbolTree<String> = SymbolTree::new();
    for host in ["b.example", "a.example", "c.example", "a.example"] {
        hosts.insert(host.to_string());
    }

    assert_eq!(hosts.len(), 3);
    assert_eq!(hosts.remove(&"b.example".to_string()).as_deref(), Some("b.example"));
    assert_eq!(hosts.keys(), vec!["a.example", "c.example"]);
}
