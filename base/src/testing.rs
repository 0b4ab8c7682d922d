// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Local HTTP responder for exercising real clients in tests.
use tokio::{
  io::{AsyncReadExt, AsyncWriteExt},
  net::TcpListener,
  task::JoinHandle,
};

pub struct OneShotServer {
  pub base_url: String,
  handle: JoinHandle<String>,
}

impl OneShotServer {
  /// Serves exactly one request with the given status line and body.
  pub async fn respond(status: &str, content_type: &str, body: &str) -> Self {
    let listener = TcpListener::bind("127.0.0.1:0")
      .await
      .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
      "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
      status,
      content_type,
      body.len(),
      body
    );

    let handle = tokio::spawn(async move {
      let (mut socket, _) = listener.accept().await.expect("accept connection");
      let request = read_request(&mut socket).await;
      socket
        .write_all(response.as_bytes())
        .await
        .expect("write response");
      let _ = socket.shutdown().await;
      request
    });

    Self {
      base_url: format!("http://{}", addr),
      handle,
    }
  }

  /// The raw request text as received.
  pub async fn request(self) -> String {
    self.handle.await.expect("responder task")
  }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
  let mut buf = Vec::new();
  let mut chunk = [0u8; 1024];
  loop {
    let n = socket.read(&mut chunk).await.expect("read request");
    if n == 0 {
      break;
    }
    buf.extend_from_slice(&chunk[..n]);

    let text = String::from_utf8_lossy(&buf);
    if let Some(header_end) = text.find("\r\n\r\n") {
      let body_len = text[..header_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
      if buf.len() >= header_end + 4 + body_len {
        break;
      }
    }
  }
  String::from_utf8_lossy(&buf).into_owned()
}
