//! Synthetic contracts, provider types and resolution context
//!
//! Provider types are registered into the real link-time slice so that the
//! default catalog of `ProviderRegistry::create` sees them.

use std::io::{BufRead, Cursor};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use spi_application::{
    Contract, Located, PROVIDER_TYPES, ProviderObject, ProviderType, RegistrySource,
    ResolutionContext, default_factory, implementation,
};
use spi_domain::{Error, RegistryKey, Result};

pub trait Codec {
    fn name(&self) -> &'static str;
}

impl Contract for dyn Codec {
    const IDENTITY: &'static str = "test.spi.Codec";
}

pub trait Clock {
    fn ticks(&self) -> u64;
}

impl Contract for dyn Clock {
    const IDENTITY: &'static str = "test.spi.Clock";
}

#[derive(Default)]
pub struct Gzip;

impl Codec for Gzip {
    fn name(&self) -> &'static str {
        "gzip"
    }
}

#[derive(Default)]
pub struct Brotli;

impl Codec for Brotli {
    fn name(&self) -> &'static str {
        "brotli"
    }
}

#[derive(Default)]
pub struct Zstd;

impl Codec for Zstd {
    fn name(&self) -> &'static str {
        "zstd"
    }
}

#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn ticks(&self) -> u64 {
        42
    }
}

pub struct PanickingCodec;

impl Default for PanickingCodec {
    fn default() -> Self {
        panic!("codec tables are corrupt")
    }
}

impl Codec for PanickingCodec {
    fn name(&self) -> &'static str {
        "panicking"
    }
}

/// Number of `CountedClock` constructions so far
pub static COUNTED_CLOCK_BUILDS: AtomicUsize = AtomicUsize::new(0);

/// Clock whose factory counts its calls; only one test lists it
pub struct CountedClock;

impl Clock for CountedClock {
    fn ticks(&self) -> u64 {
        7
    }
}

fn counted_clock_factory() -> std::result::Result<ProviderObject, String> {
    COUNTED_CLOCK_BUILDS.fetch_add(1, Ordering::SeqCst);
    Ok(Box::new(CountedClock))
}

fn failing_factory() -> std::result::Result<ProviderObject, String> {
    Err("codec backend unavailable".to_string())
}

#[linkme::distributed_slice(PROVIDER_TYPES)]
static GZIP: ProviderType = ProviderType {
    name: "test.spi.Gzip",
    description: "gzip codec",
    factory: Some(default_factory::<Gzip>),
    implements: &[implementation!(Gzip => dyn Codec)],
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static BROTLI: ProviderType = ProviderType {
    name: "test.spi.Brotli",
    description: "brotli codec",
    factory: Some(default_factory::<Brotli>),
    implements: &[implementation!(Brotli => dyn Codec)],
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static ZSTD: ProviderType = ProviderType {
    name: "test.spi.Zstd",
    description: "zstd codec",
    factory: Some(default_factory::<Zstd>),
    implements: &[implementation!(Zstd => dyn Codec)],
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static SYSTEM_CLOCK: ProviderType = ProviderType {
    name: "test.spi.SystemClock",
    description: "wall clock",
    factory: Some(default_factory::<SystemClock>),
    implements: &[implementation!(SystemClock => dyn Clock)],
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static ABSTRACT_CODEC: ProviderType = ProviderType {
    name: "test.spi.AbstractCodec",
    description: "codec without a zero-argument constructor",
    factory: None,
    implements: &[implementation!(Gzip => dyn Codec)],
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static BROKEN_CODEC: ProviderType = ProviderType {
    name: "test.spi.BrokenCodec",
    description: "codec whose constructor fails",
    factory: Some(failing_factory),
    implements: &[implementation!(Gzip => dyn Codec)],
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static PANICKING_CODEC: ProviderType = ProviderType {
    name: "test.spi.PanickingCodec",
    description: "codec whose Default implementation panics",
    factory: Some(default_factory::<PanickingCodec>),
    implements: &[implementation!(PanickingCodec => dyn Codec)],
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static COUNTED_CLOCK: ProviderType = ProviderType {
    name: "test.spi.CountedClock",
    description: "clock counting its constructions",
    factory: Some(counted_clock_factory),
    implements: &[implementation!(CountedClock => dyn Clock)],
};

/// One resource in one location
#[derive(Clone)]
enum Entry {
    Text(String),
    Bytes(Vec<u8>),
    Unreadable,
}

/// A location: name plus `(resource path, entry)` pairs
#[derive(Clone)]
struct Location {
    name: String,
    resources: Vec<(String, Entry)>,
    broken: bool,
}

/// Ordered list of synthetic locations
#[derive(Clone, Default)]
pub struct TestContext {
    locations: Vec<Location>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn location_mut(&mut self, name: &str) -> &mut Location {
        if let Some(index) = self.locations.iter().position(|l| l.name == name) {
            return &mut self.locations[index];
        }
        self.locations.push(Location {
            name: name.to_string(),
            resources: Vec::new(),
            broken: false,
        });
        self.locations.last_mut().unwrap()
    }

    pub fn with(mut self, location: &str, path: &str, content: &str) -> Self {
        self.location_mut(location)
            .resources
            .push((path.to_string(), Entry::Text(content.to_string())));
        self
    }

    pub fn with_bytes(mut self, location: &str, path: &str, content: &[u8]) -> Self {
        self.location_mut(location)
            .resources
            .push((path.to_string(), Entry::Bytes(content.to_vec())));
        self
    }

    pub fn with_unreadable(mut self, location: &str, path: &str) -> Self {
        self.location_mut(location)
            .resources
            .push((path.to_string(), Entry::Unreadable));
        self
    }

    pub fn with_broken_location(mut self, location: &str) -> Self {
        self.location_mut(location).broken = true;
        self
    }

    pub fn shared(self) -> Arc<dyn ResolutionContext> {
        Arc::new(self)
    }
}

struct TestSource<'a> {
    location: String,
    entry: &'a Entry,
}

impl RegistrySource for TestSource<'_> {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        match self.entry {
            Entry::Text(text) => Ok(Box::new(Cursor::new(text.as_bytes()))),
            Entry::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            Entry::Unreadable => Err(Error::resource_resolution(
                self.location.clone(),
                "permission denied",
            )),
        }
    }
}

impl ResolutionContext for TestContext {
    fn describe(&self) -> String {
        format!("test context ({} locations)", self.locations.len())
    }

    fn locate(&self, key: &RegistryKey) -> Vec<Located<'_>> {
        let wanted = key.resource_path();
        let mut found: Vec<Located<'_>> = Vec::new();
        for location in &self.locations {
            if location.broken {
                found.push(Err(Error::resource_resolution(
                    location.name.clone(),
                    "location cannot be listed",
                )));
                continue;
            }
            for (path, entry) in &location.resources {
                if *path == wanted {
                    let source: Box<dyn RegistrySource + '_> = Box::new(TestSource {
                        location: format!("{}/{}", location.name, path),
                        entry,
                    });
                    found.push(Ok(source));
                }
            }
        }
        found
    }
}

pub const CODEC_RESOURCE: &str = "META-INF/services/test.spi.Codec";

pub fn codec_names(providers: &[Box<dyn Codec>]) -> Vec<&'static str> {
    providers.iter().map(|codec| codec.name()).collect()
}
