use std::{collections::BTreeMap, fmt, sync::Arc};

#[derive(Debug, Clone)]
pub struct BlobbyError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<BlobbyCause>,
}

#[derive(Debug, Clone)]
pub enum BlobbyCause {
    Blobby(Box<BlobbyError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl BlobbyError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_blobby(mut self, cause: BlobbyError) -> Self {
        self.causes.push(BlobbyCause::Blobby(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(BlobbyCause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for BlobbyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for BlobbyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            BlobbyCause::Blobby(e) => Some(e.as_ref() as &dyn std::error::Error),
            BlobbyCause::Std(e) => Some(e.as_ref()),
        })
    }
}

impl From<winit::error::EventLoopError> for BlobbyError {
    fn from(err: winit::error::EventLoopError) -> Self {
        BlobbyError::new("winit::error::EventLoopError").push_std(err)
    }
}

impl From<winit::error::OsError> for BlobbyError {
    fn from(err: winit::error::OsError) -> Self {
        BlobbyError::new("winit::error::OsError").push_std(err)
    }
}

impl From<wgpu::CreateSurfaceError> for BlobbyError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        BlobbyError::new("wgpu::CreateSurfaceError").push_std(err)
    }
}

impl From<wgpu::RequestAdapterError> for BlobbyError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        BlobbyError::new("wgpu::RequestAdapterError").push_std(err)
    }
}

impl From<wgpu::RequestDeviceError> for BlobbyError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        BlobbyError::new("wgpu::RequestDeviceError").push_std(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_lists_sorted_args() {
        let err = BlobbyError::new("surface-size")
            .with_arg("width", 0)
            .with_arg("height", 512);
        assert_eq!(err.to_string(), "surface-size(height=512, width=0)");
    }

    #[test]
    fn source_is_first_cause() {
        let inner = BlobbyError::new("adapter").with_arg("backend", "vulkan");
        let err = BlobbyError::new("renderer-init").push_blobby(inner);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("adapter(backend=vulkan)"));
    }

    #[test]
    fn std_causes_are_kept() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let err = BlobbyError::new("window").push_std(io);
        assert_eq!(err.causes.len(), 1);
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("gone"));
    }
}
