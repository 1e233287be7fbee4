//! RDKit through its MinimalLib C API (`rdkitcffi`), loaded at runtime.
//!
//! Every buffer the C API hands back (molecule pickles, SVG text, version
//! strings) is allocated by the library and must be returned through its
//! `free_ptr`. `NativeBuffer` does that on drop, so handles are released on
//! every exit path. Handles borrow the [`RdkitLibrary`] they came from and are
//! neither `Send` nor `Sync`.

use std::{
    ffi::{c_char, CStr, CString},
    fmt,
    marker::PhantomData,
    path::{Path, PathBuf},
    ptr::NonNull,
};

use libloading::Library;

use super::Toolkit;
use crate::{
    error::DepictError,
    options::{CanvasOptions, ToolkitOptions},
};

/// Stem of the MinimalLib shared library (`librdkitcffi.so` on Linux).
const LIBRARY_NAME: &str = "rdkitcffi";

type GetMolFn = unsafe extern "C" fn(
    input: *const c_char,
    pkl_sz: *mut usize,
    details_json: *const c_char,
) -> *mut c_char;
type GetSvgFn = unsafe extern "C" fn(
    pkl: *const c_char,
    pkl_sz: usize,
    details_json: *const c_char,
) -> *mut c_char;
type FreePtrFn = unsafe extern "C" fn(ptr: *mut c_char);
type VersionFn = unsafe extern "C" fn() -> *mut c_char;

/// A loaded `rdkitcffi` library with its entry points resolved.
pub struct RdkitLibrary {
    get_mol: GetMolFn,
    get_svg: GetSvgFn,
    free_ptr: FreePtrFn,
    version: VersionFn,
    path: PathBuf,
    // Keeps the function pointers above valid.
    _library: Library,
}

impl RdkitLibrary {
    /// Load the library, trying each configured search location in order and
    /// then the platform loader's default search path.
    ///
    /// # Errors
    ///
    /// Returns [`DepictError::LibraryLoad`] if no location yields a loadable
    /// library, [`DepictError::MissingSymbol`] if the library lacks an entry
    /// point, or [`DepictError::InvalidOptions`] if there is nowhere to look.
    pub fn load(options: &ToolkitOptions) -> Result<Self, DepictError> {
        let attempted = candidates(options);
        let mut last_error = None;
        for path in &attempted {
            log::debug!("trying toolkit library at {}", path.display());
            // SAFETY: loading only runs the library's static initializers,
            // which take no input from us.
            match unsafe { Library::new(path) } {
                Ok(library) => return Self::resolve(library, path.clone()),
                Err(e) => last_error = Some(e),
            }
        }
        let Some(source) = last_error else {
            return Err(DepictError::InvalidOptions(
                "no toolkit library locations to search".to_owned(),
            ));
        };
        Err(DepictError::LibraryLoad { attempted, source })
    }

    fn resolve(library: Library, path: PathBuf) -> Result<Self, DepictError> {
        // SAFETY: the function types mirror the declarations in MinimalLib's
        // cffi.h.
        let lib = unsafe {
            Self {
                get_mol: symbol(&library, "get_mol")?,
                get_svg: symbol(&library, "get_svg")?,
                free_ptr: symbol(&library, "free_ptr")?,
                version: symbol(&library, "version")?,
                path,
                _library: library,
            }
        };
        log::info!("loaded toolkit library from {}", lib.path.display());
        Ok(lib)
    }

    /// Location the library was loaded from, as given to the loader.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn take(&self, raw: *mut c_char) -> Option<NativeBuffer<'_>> {
        NonNull::new(raw).map(|ptr| NativeBuffer {
            ptr,
            free_ptr: self.free_ptr,
            _library: PhantomData,
        })
    }
}

impl fmt::Debug for RdkitLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RdkitLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Resolve one exported function.
unsafe fn symbol<T: Copy>(
    library: &Library,
    name: &'static str,
) -> Result<T, DepictError> {
    library
        .get::<T>(name.as_bytes())
        .map(|sym| *sym)
        .map_err(|source| DepictError::MissingSymbol {
            symbol: name,
            source,
        })
}

fn candidates(options: &ToolkitOptions) -> Vec<PathBuf> {
    let file_name = libloading::library_filename(LIBRARY_NAME);
    let mut paths: Vec<PathBuf> = options
        .search_paths
        .iter()
        .map(|p| if p.is_dir() { p.join(&file_name) } else { p.clone() })
        .collect();
    if !options.search_paths_only {
        paths.push(PathBuf::from(file_name));
    }
    paths
}

/// Convert SMILES for the C API. Interior NUL bytes would silently truncate
/// the input on the C side, so they are a parse error here.
fn smiles_cstring(smiles: &str) -> Result<CString, DepictError> {
    CString::new(smiles).map_err(|_| {
        DepictError::Parse(format!("{smiles:?} contains a NUL byte"))
    })
}

/// Drawing details understood by MinimalLib's `get_svg`.
fn drawing_details(canvas: &CanvasOptions) -> String {
    serde_json::json!({
        "width": canvas.width,
        "height": canvas.height,
        "addAtomIndices": canvas.add_atom_indices,
        "scalingFactor": canvas.scaling_factor,
    })
    .to_string()
}

/// A library-allocated buffer, returned to the library on drop.
struct NativeBuffer<'lib> {
    ptr: NonNull<c_char>,
    free_ptr: FreePtrFn,
    _library: PhantomData<&'lib RdkitLibrary>,
}

impl NativeBuffer<'_> {
    fn as_ptr(&self) -> *const c_char {
        self.ptr.as_ptr()
    }

    /// Read the buffer as a NUL-terminated string.
    fn to_string_lossy(&self) -> String {
        // SAFETY: only called on buffers the C API documents as
        // NUL-terminated strings.
        unsafe { CStr::from_ptr(self.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    }
}

impl Drop for NativeBuffer<'_> {
    fn drop(&mut self) {
        // SAFETY: the pointer came from this library and is freed once.
        unsafe { (self.free_ptr)(self.ptr.as_ptr()) }
    }
}

/// A parsed molecule: the pickle produced by `get_mol`.
pub struct RdkitMolecule<'lib> {
    pickle: NativeBuffer<'lib>,
    len: usize,
}

impl RdkitMolecule<'_> {
    /// Size of the serialized molecule in bytes.
    #[must_use]
    pub fn pickle_len(&self) -> usize {
        self.len
    }
}

impl fmt::Debug for RdkitMolecule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RdkitMolecule")
            .field("pickle_len", &self.len)
            .finish()
    }
}

impl<'lib> Toolkit for &'lib RdkitLibrary {
    type Molecule = RdkitMolecule<'lib>;

    fn name(&self) -> &'static str {
        "RDKit"
    }

    fn version(&self) -> Option<String> {
        let lib: &'lib RdkitLibrary = *self;
        // SAFETY: takes no arguments; returns an owned string or null.
        let raw = unsafe { (lib.version)() };
        lib.take(raw).map(|buf| buf.to_string_lossy())
    }

    fn parse_smiles(
        &self,
        smiles: &str,
    ) -> Result<RdkitMolecule<'lib>, DepictError> {
        let lib: &'lib RdkitLibrary = *self;
        let input = smiles_cstring(smiles)?;
        let details = CString::default();
        let mut len = 0usize;
        // SAFETY: both strings are NUL-terminated and outlive the call, and
        // `len` is a valid out-pointer.
        let raw =
            unsafe { (lib.get_mol)(input.as_ptr(), &mut len, details.as_ptr()) };
        match lib.take(raw) {
            Some(pickle) if len > 0 => Ok(RdkitMolecule { pickle, len }),
            _ => Err(DepictError::Parse(format!(
                "toolkit rejected {smiles:?}"
            ))),
        }
    }

    fn draw_svg(
        &self,
        molecule: &RdkitMolecule<'lib>,
        canvas: &CanvasOptions,
    ) -> Result<String, DepictError> {
        let lib: &'lib RdkitLibrary = *self;
        let details = CString::new(drawing_details(canvas))
            .map_err(|e| DepictError::Render(e.to_string()))?;
        // SAFETY: the pickle and its length come from `get_mol` on this
        // library; `details` is NUL-terminated and outlives the call.
        let raw = unsafe {
            (lib.get_svg)(molecule.pickle.as_ptr(), molecule.len, details.as_ptr())
        };
        let svg = lib
            .take(raw)
            .map(|buf| buf.to_string_lossy())
            .unwrap_or_default();
        if svg.contains("<svg") {
            Ok(svg)
        } else {
            Err(DepictError::Render(
                "toolkit returned no drawing".to_owned(),
            ))
        }
    }
}
