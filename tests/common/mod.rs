#![allow(dead_code)]

use assert_cmd::Command;
use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::PKey;
use openssl::x509::{X509Builder, X509NameBuilder};
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub developer: PathBuf,
    pub trusted: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let developer = tmp.path().join("developer");
        let trusted = tmp.path().join("trusted");
        Self {
            _tmp: tmp,
            home,
            developer,
            trusted,
        }
    }

    /// The binary with an isolated home and config directory and no
    /// inherited overrides.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("keytrust").expect("binary built");
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("KEYTRUST_DEVELOPER_KEYS")
            .env_remove("KEYTRUST_TRUSTED_KEYS")
            .env_remove("KEYTRUST_API_URL");
        cmd
    }

    /// `keytrust --no-emojis list` pointed at this environment's stores.
    pub fn list(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--no-emojis")
            .arg("list")
            .arg("--developer-keys")
            .arg(&self.developer)
            .arg("--trusted-keys")
            .arg(&self.trusted);
        cmd
    }
}

pub fn certificate_pem(serial: u32, common_name: &str) -> Vec<u8> {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).expect("curve");
    let key = PKey::from_ec_key(EcKey::generate(&group).expect("ec key")).expect("pkey");

    let mut name = X509NameBuilder::new().expect("name builder");
    name.append_entry_by_text("CN", common_name).expect("CN");
    name.append_entry_by_text("O", "Integration").expect("O");
    let name = name.build();

    let mut builder = X509Builder::new().expect("x509 builder");
    builder.set_version(2).expect("version");
    let serial = BigNum::from_u32(serial)
        .and_then(|bn| bn.to_asn1_integer())
        .expect("serial");
    builder.set_serial_number(&serial).expect("set serial");
    builder.set_subject_name(&name).expect("subject");
    builder.set_issuer_name(&name).expect("issuer");
    builder.set_pubkey(&key).expect("pubkey");
    builder
        .set_not_before(&Asn1Time::days_from_now(0).expect("now"))
        .expect("not before");
    builder
        .set_not_after(&Asn1Time::days_from_now(365).expect("later"))
        .expect("not after");
    builder.sign(&key, MessageDigest::sha256()).expect("sign");
    builder.build().to_pem().expect("pem")
}

pub fn write_pair(dir: &Path, stem: &str, serial: u32, with_private: bool) {
    fs::create_dir_all(dir).expect("create key dir");
    fs::write(
        dir.join(format!("{}-public.pem", stem)),
        certificate_pem(serial, stem),
    )
    .expect("write certificate");
    if with_private {
        fs::write(dir.join(format!("{}-private.key", stem)), "private").expect("write private key");
    }
}

/// Answers exactly one HTTP request with the given status line and body.
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let url = format!("http://{}", listener.local_addr().expect("local addr"));
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let handle = thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });
    (url, handle)
}

/// A URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
