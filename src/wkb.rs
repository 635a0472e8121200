//! Minimal WKB polygon decoding.
//!
//! Decodes the ring-structured polygon records the dataset carries in its
//! geometry column: byte order, geometry type, ring count, then each ring
//! as a length-prefixed run of (x, y) f64 pairs.

use anyhow::{bail, Context, Result};
use geo::{Coord, LineString, Polygon};

use crate::column::PackedGeometryColumn;

/// WKB geometry type for Polygon
const WKB_POLYGON: u32 = 3;
/// WKB byte order: little endian
const WKB_LE: u8 = 1;

/// Cursor over one WKB record, honoring its declared byte order.
struct WkbReader<'a> {
    buf: &'a [u8],
    pos: usize,
    little_endian: bool,
}

impl<'a> WkbReader<'a> {
    fn new(buf: &'a [u8]) -> Result<Self> {
        let Some(&order) = buf.first() else {
            bail!("[wkb] Empty geometry record");
        };
        Ok(Self { buf, pos: 1, little_endian: order == WKB_LE })
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos + n;
        if end > self.buf.len() {
            bail!("[wkb] Truncated geometry record: needed {} bytes at offset {}", n, self.pos);
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let bytes: [u8; 4] = self.take(4)?.try_into()?;
        Ok(if self.little_endian {
            u32::from_le_bytes(bytes)
        } else {
            u32::from_be_bytes(bytes)
        })
    }

    fn read_f64(&mut self) -> Result<f64> {
        let bytes: [u8; 8] = self.take(8)?.try_into()?;
        Ok(if self.little_endian {
            f64::from_le_bytes(bytes)
        } else {
            f64::from_be_bytes(bytes)
        })
    }

    fn read_ring(&mut self) -> Result<LineString<f64>> {
        let len = self.read_u32().context("[wkb] Failed to read ring length")? as usize;
        // The declared length is untrusted; reserve no more than the buffer
        // can still hold (16 bytes per coordinate pair).
        let remaining = (self.buf.len() - self.pos) / 16;
        let mut coords = Vec::with_capacity(len.min(remaining));
        for _ in 0..len {
            let x = self.read_f64()?;
            let y = self.read_f64()?;
            coords.push(Coord { x, y });
        }
        Ok(LineString::from(coords))
    }
}

/// Decode one WKB polygon record: exterior ring plus zero or more holes.
pub fn polygon_from_wkb(bytes: &[u8]) -> Result<Polygon<f64>> {
    let mut reader = WkbReader::new(bytes)?;

    let geom_type = reader.read_u32().context("[wkb] Failed to read geometry type")?;
    if geom_type != WKB_POLYGON {
        bail!("[wkb] Expected Polygon geometry type, got {}", geom_type);
    }

    let num_rings = reader.read_u32().context("[wkb] Failed to read ring count")?;
    if num_rings == 0 {
        bail!("[wkb] Polygon must have at least one ring");
    }

    let exterior = reader.read_ring().context("[wkb] Failed to read exterior ring")?;
    let mut interiors = Vec::with_capacity(num_rings as usize - 1);
    for _ in 1..num_rings {
        interiors.push(reader.read_ring().context("[wkb] Failed to read interior ring")?);
    }

    Ok(Polygon::new(exterior, interiors))
}

/// Decode every record of a packed geometry column, in row order.
///
/// The column builder never validates its records, so this is where a
/// malformed geometry surfaces; the error names the failing record.
pub fn decode_polygons(column: &PackedGeometryColumn) -> Result<Vec<Polygon<f64>>> {
    column
        .iter()
        .enumerate()
        .map(|(i, record)| {
            polygon_from_wkb(record).with_context(|| format!("[wkb] Failed to decode record {}", i))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_polygons, polygon_from_wkb, WKB_LE, WKB_POLYGON};
    use crate::column::PackedGeometryColumn;
    use geo::{Coord, LineString, Polygon};

    /// Little-endian WKB encoding of ring-structured coordinates.
    fn encode_wkb(rings: &[&[(f64, f64)]]) -> Vec<u8> {
        let mut out = vec![WKB_LE];
        out.extend_from_slice(&WKB_POLYGON.to_le_bytes());
        out.extend_from_slice(&(rings.len() as u32).to_le_bytes());
        for ring in rings {
            out.extend_from_slice(&(ring.len() as u32).to_le_bytes());
            for (x, y) in *ring {
                out.extend_from_slice(&x.to_le_bytes());
                out.extend_from_slice(&y.to_le_bytes());
            }
        }
        out
    }

    fn unit_square() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
    }

    #[test]
    fn decodes_polygon_with_hole() {
        let exterior = unit_square();
        let hole = vec![(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75), (0.25, 0.25)];
        let bytes = encode_wkb(&[&exterior, &hole]);

        let polygon = polygon_from_wkb(&bytes).unwrap();
        let expected = Polygon::new(
            LineString::from(exterior.iter().map(|&(x, y)| Coord { x, y }).collect::<Vec<_>>()),
            vec![LineString::from(hole.iter().map(|&(x, y)| Coord { x, y }).collect::<Vec<_>>())],
        );
        assert_eq!(polygon, expected);
    }

    #[test]
    fn rejects_wrong_geometry_type() {
        let mut bytes = vec![WKB_LE];
        bytes.extend_from_slice(&2u32.to_le_bytes()); // LineString
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert!(polygon_from_wkb(&bytes).is_err());
    }

    #[test]
    fn rejects_huge_declared_ring_length() {
        // A 13-byte record claiming a ~4-billion-point ring must fail with
        // a decode error, not attempt a matching allocation.
        let mut bytes = vec![WKB_LE];
        bytes.extend_from_slice(&WKB_POLYGON.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(polygon_from_wkb(&bytes).is_err());
    }

    #[test]
    fn rejects_truncated_record() {
        let full = encode_wkb(&[&unit_square()]);
        assert!(polygon_from_wkb(&full[..full.len() - 3]).is_err());
        assert!(polygon_from_wkb(&[]).is_err());
    }

    #[test]
    fn decodes_packed_column_and_names_bad_record() {
        let good = encode_wkb(&[&unit_square()]);
        let column = PackedGeometryColumn::from_records([good.as_slice(), good.as_slice()]);
        assert_eq!(decode_polygons(&column).unwrap().len(), 2);

        let bad = PackedGeometryColumn::from_records([good.as_slice(), b"junk"]);
        let err = decode_polygons(&bad).unwrap_err();
        assert!(format!("{:#}", err).contains("record 1"));
    }
}
