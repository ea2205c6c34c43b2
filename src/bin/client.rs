//! Interactive line-oriented client.
//!
//! Reads one request per line: `GET`, `POST <payload-file>`, `DELETE <id>`,
//! or any other word, which is sent verbatim as the HTTP method. Prints the
//! raw response body. Any HTTP client can stand in for this tool.

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Method;
use reqwest::blocking::Client;

#[derive(Debug, Parser)]
#[command(name = "rosterdb-client", version, about)]
struct Args {
    /// Server endpoint.
    #[arg(long, default_value = "http://localhost:8080/")]
    url: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();
    let stdin = io::stdin();

    loop {
        print!("Request:");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let body = match verb {
            "POST" => {
                let path = match parts.next() {
                    Some(path) => path,
                    None => {
                        eprintln!("POST needs a payload file");
                        continue;
                    }
                };
                fs::read(path).with_context(|| format!("reading {path}"))?
            }
            "DELETE" => parts.next().unwrap_or_default().as_bytes().to_vec(),
            _ => Vec::new(),
        };

        let method = match Method::from_bytes(verb.as_bytes()) {
            Ok(method) => method,
            Err(_) => {
                eprintln!("invalid method '{verb}'");
                continue;
            }
        };

        match client.request(method, args.url.as_str()).body(body).send() {
            Ok(response) => println!("{}", response.text()?),
            Err(err) => eprintln!("request failed: {err}"),
        }
    }

    Ok(())
}
