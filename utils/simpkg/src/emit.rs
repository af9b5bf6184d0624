use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PackagingError, Result};
use crate::registry::Registry;

/// Location of the descriptor relative to the top-level source directory.
pub const PACKAGING_FILE: &str = "cmake/simh-packaging.cmake";

/// Emitted ahead of every family block.
pub const PREAMBLE: &str = r#"## The default runtime support component/family:
cpack_add_component(runtime_support
    DISPLAY_NAME "Runtime support"
    DESCRIPTION "Required SIMH runtime support (documentation, shared libraries)"
    REQUIRED
)

install(FILES doc/simh.doc TYPE DOC COMPONENT runtime_support)

"#;

pub fn packaging_path(toplevel_dir: &Path) -> PathBuf {
    toplevel_dir.join(PACKAGING_FILE)
}

/// Render the full descriptor: preamble, then one block per encountered family.
pub fn render_packaging<W: Write>(registry: &Registry, stream: &mut W) -> io::Result<()> {
    stream.write_all(PREAMBLE.as_bytes())?;
    for family in registry.referenced_families() {
        family.write_component_info(registry, stream, 0)?;
    }
    Ok(())
}

pub fn render_packaging_to_string(registry: &Registry) -> String {
    let mut out = Vec::new();
    render_packaging(registry, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}

/// Write `<toplevel_dir>/cmake/simh-packaging.cmake`, replacing any existing file.
///
/// The `cmake` directory must already exist.
pub fn write_packaging(registry: &Registry, toplevel_dir: &Path) -> Result<PathBuf> {
    let path = packaging_path(toplevel_dir);
    tracing::info!(path = %path.display(), "writing packaging descriptor");

    let io_err = |source: io::Error| PackagingError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut stream = BufWriter::new(file);
    render_packaging(registry, &mut stream).map_err(io_err)?;
    stream.flush().map_err(io_err)?;

    Ok(path)
}
