//! Memory-mapped catalog embedding matrix.
//!
//! The matrix is produced offline by the encoder pipeline and shipped as a
//! NumPy `.npy` file: one L2-normalized f32 row per catalog item, in catalog
//! order. We map it read-only and never copy it; only the tiny header is
//! parsed here.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::info;

use super::error::CatalogError;

const NPY_MAGIC: &[u8] = b"\x93NUMPY";

enum Backing {
    Mapped { mmap: Mmap, data_offset: usize },
    Owned(Vec<f32>),
}

/// Read-only embedding matrix: `rows` vectors of dimension `dim`.
pub struct EmbeddingMatrix {
    backing: Backing,
    rows: usize,
    dim: usize,
}

impl std::fmt::Debug for EmbeddingMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingMatrix")
            .field(
                "backing",
                &match self.backing {
                    Backing::Mapped { .. } => "Mapped",
                    Backing::Owned(_) => "Owned",
                },
            )
            .field("rows", &self.rows)
            .field("dim", &self.dim)
            .finish()
    }
}

impl EmbeddingMatrix {
    /// Maps a 2-D little-endian f32 `.npy` file.
    pub fn load_npy(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: the file is opened read-only and treated as immutable for
        // the process lifetime; external truncation would be a deployment
        // error, not something we defend against at every access.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (data_offset, rows, dim) = parse_npy_header(path, &mmap)?;

        let expected = data_offset + rows * dim * size_of::<f32>();
        if mmap.len() < expected {
            return Err(CatalogError::InvalidNpy {
                path: path.to_path_buf(),
                reason: format!("file is {} bytes, header implies {expected}", mmap.len()),
            });
        }

        info!(path = %path.display(), rows, dim, "Embedding matrix mapped");

        Ok(Self {
            backing: Backing::Mapped { mmap, data_offset },
            rows,
            dim,
        })
    }

    /// Builds an in-memory matrix from explicit rows (fixtures and tests).
    ///
    /// All rows must share the same dimension.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        let dim = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == dim), "ragged rows");

        let n = rows.len();
        let data: Vec<f32> = rows.into_iter().flatten().collect();

        Self {
            backing: Backing::Owned(data),
            rows: n,
            dim,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row `i` as a float slice. Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f32] {
        assert!(i < self.rows, "row {i} out of bounds ({} rows)", self.rows);
        let data = self.data();
        &data[i * self.dim..(i + 1) * self.dim]
    }

    /// Dot product of row `i` with `q` (cosine similarity when both sides
    /// are L2-normalized).
    pub fn dot(&self, i: usize, q: &[f32]) -> f32 {
        self.row(i).iter().zip(q).map(|(a, b)| a * b).sum()
    }

    fn data(&self) -> &[f32] {
        match &self.backing {
            Backing::Mapped { mmap, data_offset } => {
                let bytes = &mmap[*data_offset..*data_offset + self.rows * self.dim * 4];
                // npy headers are padded to 64 bytes, so the data section is
                // always f32-aligned within the page-aligned mapping.
                bytemuck::cast_slice(bytes)
            }
            Backing::Owned(data) => data,
        }
    }
}

/// Parses the npy preamble; returns `(data_offset, rows, dim)`.
fn parse_npy_header(path: &Path, bytes: &[u8]) -> Result<(usize, usize, usize), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidNpy {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if bytes.len() < 10 || &bytes[..NPY_MAGIC.len()] != NPY_MAGIC {
        return Err(invalid("missing npy magic"));
    }

    let major = bytes[6];
    let (header_start, header_len) = match major {
        1 => (
            10,
            u16::from_le_bytes([bytes[8], bytes[9]]) as usize,
        ),
        2 | 3 => {
            if bytes.len() < 12 {
                return Err(invalid("truncated header length"));
            }
            (
                12,
                u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize,
            )
        }
        v => return Err(invalid(&format!("unsupported npy version {v}"))),
    };

    let data_offset = header_start + header_len;
    if bytes.len() < data_offset {
        return Err(invalid("truncated header"));
    }

    let header = std::str::from_utf8(&bytes[header_start..data_offset])
        .map_err(|_| invalid("header is not valid UTF-8"))?;

    if !header.contains("<f4") {
        let dtype = extract_quoted(header, "descr").unwrap_or_default();
        return Err(CatalogError::UnsupportedDtype {
            path: path.to_path_buf(),
            dtype,
        });
    }

    if header.contains("'fortran_order': True") {
        return Err(invalid("fortran-ordered arrays are not supported"));
    }

    let shape = parse_shape(header).ok_or_else(|| invalid("missing or malformed shape"))?;
    match shape.as_slice() {
        [rows, dim] => Ok((data_offset, *rows, *dim)),
        other => Err(invalid(&format!("expected a 2-D array, got shape {other:?}"))),
    }
}

fn parse_shape(header: &str) -> Option<Vec<usize>> {
    let start = header.find("'shape':")?;
    let rest = &header[start..];
    let open = rest.find('(')?;
    let close = rest.find(')')?;
    let inner = &rest[open + 1..close];

    let dims: Vec<usize> = inner
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect::<Option<Vec<_>>>()?;

    if dims.is_empty() { None } else { Some(dims) }
}

fn extract_quoted(header: &str, key: &str) -> Option<String> {
    let start = header.find(&format!("'{key}':"))?;
    let rest = &header[start + key.len() + 3..];
    let open = rest.find('\'')?;
    let close = rest[open + 1..].find('\'')?;
    Some(rest[open + 1..open + 1 + close].to_string())
}
