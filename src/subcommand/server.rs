use {
  super::*,
  axum::{
    extract::{Extension, Path},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
  },
  tokio::runtime::Runtime,
  tower_http::set_header::SetResponseHeaderLayer,
};

const BOOT: &str = "import init from '/app/tracker-app.js';\n\nawait init();\n";

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'wasm-unsafe-eval'";

#[derive(Parser)]
pub(crate) struct Server {
  #[arg(long, help = "Listen on <ADDRESS> for incoming requests.")]
  address: SocketAddr,
  #[arg(
    long,
    help = "Serve wasm-bindgen output for the tracker app from <APP>.",
    value_name = "APP"
  )]
  app: Utf8PathBuf,
  #[arg(long, help = "Open server in browser.")]
  open: bool,
  #[arg(long, default_value = "Project Tracker", help = "Use <TITLE> as page title.")]
  title: String,
}

#[derive(Debug)]
struct Config {
  app: Utf8PathBuf,
  title: String,
}

#[derive(Debug)]
struct Resource {
  content_type: Mime,
  content: Vec<u8>,
}

impl Resource {
  fn new(content_type: Mime, content: impl Into<Vec<u8>>) -> Self {
    Self {
      content_type,
      content: content.into(),
    }
  }
}

impl IntoResponse for Resource {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, self.content_type.to_string())],
      self.content,
    )
      .into_response()
  }
}

#[derive(Debug, PartialEq)]
enum ServerError {
  Internal { message: String },
  NotFound { message: String },
}

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    match self {
      Self::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
      Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
    }
  }
}

type ServerResult<T = Resource> = std::result::Result<T, ServerError>;

impl Server {
  pub(crate) fn run(self) -> Result {
    ensure!(self.app.is_dir(), error::AppMissing { path: &self.app });

    let address = self.address;
    let browse = self.open;

    let router = Self::router(Config {
      app: self.app,
      title: self.title,
    });

    Runtime::new().context(error::Runtime)?.block_on(async {
      let server = axum_server::Server::bind(address);

      log::info!("serving on http://{address}/");

      if browse {
        let url = format!("http://{address}/");
        open::that(&url).context(error::Open { url: &url })?;
      }

      server
        .serve(router.into_make_service())
        .await
        .context(error::Serve { address })
    })?;

    Ok(())
  }

  fn router(config: Config) -> Router {
    Router::new()
      .route("/", get(Self::index))
      .route("/index.js", get(Self::boot))
      .route("/app/*path", get(Self::app))
      .layer(SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
      ))
      .layer(Extension(Arc::new(config)))
  }

  async fn index(config: Extension<Arc<Config>>) -> ServerResult {
    Ok(Resource::new(
      mime::TEXT_HTML_UTF_8,
      IndexHtml {
        people: UserInput::PEOPLE,
        title: config.title.clone(),
      }
      .to_string(),
    ))
  }

  async fn boot() -> ServerResult {
    Ok(Resource::new(mime::TEXT_JAVASCRIPT, BOOT))
  }

  async fn app(config: Extension<Arc<Config>>, Path(path): Path<String>) -> ServerResult {
    let not_found = || ServerError::NotFound {
      message: format!("/app/{path} not found"),
    };

    let relative = Utf8Path::new(&path);

    if !relative
      .components()
      .all(|component| matches!(component, Utf8Component::Normal(_)))
    {
      return Err(not_found());
    }

    let file = config.app.join(relative);

    if !file.is_file() {
      return Err(not_found());
    }

    let content = fs::read(&file).map_err(|err| {
      log::error!("failed to read `{file}`: {err}");
      ServerError::Internal {
        message: format!("failed to read /app/{path}"),
      }
    })?;

    Ok(Resource::new(
      mime_guess::from_path(relative).first_or_octet_stream(),
      content,
    ))
  }
}
