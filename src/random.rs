//! Cryptographically secure random bytes with an ordered provider fallback

use crate::Error;
use rand::RngCore;

/// A single source of cryptographically secure random bytes.
///
/// Implementations either fill the whole destination buffer or report a
/// failure; partial fills are not allowed.
trait EntropyProvider {
    fn fill(&self, dest: &mut [u8]) -> Result<(), ()>;
}

/// Operating system entropy via [`rand::rngs::OsRng`].
struct OsEntropy;

impl EntropyProvider for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), ()> {
        rand::rngs::OsRng.try_fill_bytes(dest).map_err(drop)
    }
}

/// Direct read of the local entropy device.
#[cfg(unix)]
struct DevUrandom;

#[cfg(unix)]
impl EntropyProvider for DevUrandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), ()> {
        use std::io::Read;
        let mut file = std::fs::File::open("/dev/urandom").map_err(drop)?;
        file.read_exact(dest).map_err(drop)
    }
}

/// Thread-local CSPRNG as the last resort.
struct ThreadEntropy;

impl EntropyProvider for ThreadEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), ()> {
        rand::thread_rng().try_fill_bytes(dest).map_err(drop)
    }
}

/// Fills `dest` with random bytes from the first provider that succeeds.
///
/// Providers are tried in a fixed order, best cryptographic quality first.
/// A provider that fails for any reason is skipped; if all of them fail,
/// [`Error::EntropyExhausted`] is returned and `dest` must not be used.
pub fn fill(dest: &mut [u8]) -> Result<(), Error> {
    let mut providers: Vec<&dyn EntropyProvider> = vec![&OsEntropy];
    #[cfg(unix)]
    providers.push(&DevUrandom);
    providers.push(&ThreadEntropy);

    for provider in providers {
        if provider.fill(dest).is_ok() {
            return Ok(());
        }
    }
    Err(Error::EntropyExhausted)
}

/// Returns `N` random bytes from the provider chain.
pub fn bytes<const N: usize>() -> Result<[u8; N], Error> {
    let mut buffer = [0u8; N];
    fill(&mut buffer)?;
    Ok(buffer)
}
