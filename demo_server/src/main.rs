//! Demo server for article-actions WASM
//!
//! A simple HTTP server that serves the built demo pages from ../pkg.
//! Routes without a file extension (e.g. the /articles navigation target
//! after a successful action) fall back to index.html. There is no API
//! behind /api/articles here, so clicking the buttons exercises the
//! failure alerts unless a real backend is proxied in front.
//!
//! Usage:
//!   cd demo_server
//!   cargo run
//!   Or: cargo run --release

use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::thread;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ROOT_DIR: &str = "../pkg";

fn main() {
    // 環境変数またはコマンドライン引数からポートとディレクトリを取得
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .or_else(|| env::args().nth(1).and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT);

    let root_dir = env::var("ROOT_DIR")
        .ok()
        .or_else(|| env::args().nth(2))
        .unwrap_or_else(|| DEFAULT_ROOT_DIR.to_string());

    let addr = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&addr)
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));

    println!("🚀 article-actions demo server running at http://localhost:{}/", port);
    println!("📁 Serving from: {}/", root_dir);
    println!("\n   Press Ctrl+C to stop the server\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let root_dir = root_dir.clone();
                thread::spawn(move || {
                    handle_client(stream, &root_dir);
                });
            }
            Err(e) => {
                eprintln!("❌ Error accepting connection: {}", e);
            }
        }
    }
}

fn handle_client(mut stream: TcpStream, root_dir: &str) {
    let mut buffer = [0; 2048];
    match stream.read(&mut buffer) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("❌ Error reading from stream: {}", e);
            return;
        }
    }

    let request = String::from_utf8_lossy(&buffer);
    let request_line = request.lines().next().unwrap_or("");

    // Parse the request: "GET /path HTTP/1.1"
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_error_response(&mut stream, 400, "Bad Request");
        return;
    }

    let method = parts[0];
    let path = parts[1];

    if method != "GET" {
        // 静的ファイル専用。/api/articles へのDELETE等もここに落ちる
        send_error_response(&mut stream, 405, "Method Not Allowed");
        return;
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("[{}] {} {}", timestamp, method, path);

    serve_file(&mut stream, path, root_dir);
}

fn serve_file(stream: &mut TcpStream, request_path: &str, root_dir: &str) {
    // Clean the path (remove query params, normalize)
    let clean_path = request_path.split('?').next().unwrap_or(request_path);
    let clean_path = if clean_path == "/" {
        "/index.html"
    } else {
        clean_path
    };

    // Security: prevent directory traversal attacks
    if clean_path.contains("..") {
        send_error_response(stream, 403, "Forbidden");
        return;
    }

    // Build file path
    let file_path = format!("{}{}", root_dir, clean_path);
    let path = Path::new(&file_path);

    // Try to read the file
    if let Ok(mut file) = fs::File::open(path) {
        let mut contents = Vec::new();
        if file.read_to_end(&mut contents).is_ok() {
            let mime_type = get_mime_type(path);
            send_response(stream, 200, "OK", mime_type, &contents);
            return;
        }
    }

    // 拡張子のないパスは遷移先ルート（/articles 等）とみなして
    // index.htmlにフォールバックする
    if Path::new(clean_path).extension().is_none() {
        let index_path = format!("{}/index.html", root_dir);
        if let Ok(mut file) = fs::File::open(&index_path) {
            let mut contents = Vec::new();
            if file.read_to_end(&mut contents).is_ok() {
                println!("   ↳ Fallback to index.html for route: {}", clean_path);
                send_response(stream, 200, "OK", "text/html; charset=utf-8", &contents);
                return;
            }
        }
    }

    // File not found
    send_error_response(stream, 404, "Not Found");
}

fn get_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("ts") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn send_response(
    stream: &mut TcpStream,
    status_code: u16,
    status_text: &str,
    content_type: &str,
    body: &[u8],
) {
    let response = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: {}\r\n\
         Content-Length: {}\r\n\
         Cache-Control: no-cache\r\n\
         \r\n",
        status_code, status_text, content_type, body.len()
    );

    if let Err(e) = stream.write_all(response.as_bytes()) {
        eprintln!("❌ Error writing response headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(body) {
        eprintln!("❌ Error writing response body: {}", e);
    }
    let _ = stream.flush();
}

fn send_error_response(stream: &mut TcpStream, status_code: u16, status_text: &str) {
    let body = format!(
        "<!DOCTYPE html>\
         <html>\
         <head><title>{} {}</title>\
         <style>body{{font-family:sans-serif;padding:40px;text-align:center}}\
         h1{{color:#d32f2f}}</style>\
         </head>\
         <body>\
         <h1>{} {}</h1>\
         <p>article-actions demo server</p>\
         </body>\
         </html>",
        status_code, status_text, status_code, status_text
    );
    send_response(stream, status_code, status_text, "text/html; charset=utf-8", body.as_bytes());
}
