//! Packed/offset columnar storage for variable-length geometry records.

/// Variable-length binary records packed into one contiguous buffer.
///
/// Record `i` occupies `data[offsets[i]..offsets[i + 1]]`. Offsets are byte
/// counts into the packed buffer, with `offsets[0] == 0` and the final
/// offset equal to the buffer length, so slicing by consecutive offset
/// pairs reproduces every input record exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGeometryColumn {
    data: Vec<u8>,
    offsets: Vec<usize>,
}

impl PackedGeometryColumn {
    /// Pack a sequence of records into a single buffer plus an offset index.
    ///
    /// Single left-to-right pass accumulating a running byte total. Record
    /// contents are not inspected; a malformed geometry is only discovered
    /// by whatever decodes the records later. An empty input is legal and
    /// yields an empty buffer with `offsets == [0]`.
    pub fn from_records<I, B>(records: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut data = Vec::new();
        let mut offsets = vec![0];
        for record in records {
            data.extend_from_slice(record.as_ref());
            offsets.push(data.len());
        }
        Self { data, offsets }
    }

    /// Number of logical records.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bytes of record `i`, or `None` when out of range.
    pub fn record(&self, i: usize) -> Option<&[u8]> {
        if i >= self.len() {
            return None;
        }
        Some(&self.data[self.offsets[i]..self.offsets[i + 1]])
    }

    /// Iterate records in row order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.offsets
            .windows(2)
            .map(|w| &self.data[w[0]..w[1]])
    }

    /// The packed byte buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The offset index (length `len() + 1`).
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::PackedGeometryColumn;

    #[test]
    fn round_trip() {
        let records: [&[u8]; 3] = [b"AB", b"", b"CDE"];
        let column = PackedGeometryColumn::from_records(records);

        assert_eq!(column.len(), 3);
        assert_eq!(column.data(), b"ABCDE");
        assert_eq!(column.offsets(), &[0, 2, 2, 5]);

        for (i, record) in records.iter().enumerate() {
            assert_eq!(column.record(i), Some(*record));
        }
        let collected: Vec<&[u8]> = column.iter().collect();
        assert_eq!(collected, records);
    }

    #[test]
    fn empty_input() {
        let column = PackedGeometryColumn::from_records(Vec::<&[u8]>::new());
        assert!(column.is_empty());
        assert_eq!(column.data(), b"");
        assert_eq!(column.offsets(), &[0]);
        assert_eq!(column.record(0), None);
    }

    #[test]
    fn offsets_cover_buffer() {
        let column = PackedGeometryColumn::from_records([b"x".as_slice(), b"yz", b""]);
        let offsets = column.offsets();
        assert_eq!(offsets[0], 0);
        assert_eq!(*offsets.last().unwrap(), column.data().len());
        for w in offsets.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn out_of_range_record() {
        let column = PackedGeometryColumn::from_records([b"ab".as_slice()]);
        assert_eq!(column.record(1), None);
    }
}
