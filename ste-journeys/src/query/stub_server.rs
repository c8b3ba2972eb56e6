//! a minimal HTTP/1.1 server answering each connection with one canned
//! response, for exercising the directions client without network access.
use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

pub struct StubServer {
    address: String,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    /// serves the given (status, body) pairs in order, one per connection
    pub fn start(responses: Vec<(u16, String)>) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("stub server binds");
        let address = listener.local_addr().expect("stub server address").to_string();
        let handle = thread::spawn(move || {
            let mut request_lines = vec![];
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().expect("stub server accepts");
                let mut reader = BufReader::new(stream.try_clone().expect("stream clones"));
                let mut request_line = String::new();
                reader
                    .read_line(&mut request_line)
                    .expect("request line reads");
                loop {
                    let mut header = String::new();
                    let n = reader.read_line(&mut header).expect("header reads");
                    if n == 0 || header == "\r\n" {
                        break;
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream
                    .write_all(response.as_bytes())
                    .expect("response writes");
                stream.flush().expect("response flushes");
                request_lines.push(request_line.trim_end().to_string());
            }
            request_lines
        });
        StubServer { address, handle }
    }

    /// a base url nothing is listening on
    pub fn closed_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("port binds");
        let address = listener.local_addr().expect("port address");
        drop(listener);
        format!("http://{address}/maps/api/directions/json")
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/maps/api/directions/json", self.address)
    }

    /// waits for every canned response to be served and returns the request
    /// lines received, in order
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("stub server thread")
    }
}
