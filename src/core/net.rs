// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). Plain-http endpoints only; TLS hosts
// are the business of whatever saved the sheet markup and are expected to
// be mirrored locally.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

/// Fetch seam so the download stage can be driven offline in tests.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>>;
}

/// Default fetcher backed by `http_get`.
pub struct HttpFetch;

impl Fetch for HttpFetch {
    fn get(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let (host, path) = split_url(url)?;
        http_get(&host, &path)
    }
}

pub fn split_url(url: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    let rest = if let Some(r) = url.strip_prefix("http://") {
        r
    } else if url.starts_with("https://") {
        return Err(format!("https not supported by the built-in fetcher: {}", url).into());
    } else {
        url
    };
    let (host, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    if host.is_empty() {
        return Err(format!("No host in url: {}", url).into());
    }
    Ok((host.to_string(), path.to_string()))
}

pub fn http_get(host: &str, path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(30)))?;
    s.set_write_timeout(Some(Duration::from_secs(30)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: cover_archive/0.6\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;

    let status_end = buf.iter().position(|&b| b == b'\r').unwrap_or(0);
    let status = String::from_utf8_lossy(&buf[..status_end]);
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or("Malformed HTTP response")?
        + 4;
    Ok(buf[body_idx..].to_vec())
}
