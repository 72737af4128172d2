use bstr::BStr;

/// Growable scratch space that token and line reads copy bytes into.
///
/// The same allocation is reused for every read; its logical length is reset
/// at the start of each token and its capacity only ever doubles.
#[derive(Debug)]
pub(crate) struct Staging {
    bytes: Vec<u8>,
}

impl Staging {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.grow_for(1);
        self.bytes.push(byte);
    }

    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.bytes.extend_from_slice(bytes);
    }

    pub(crate) fn as_bstr(&self) -> &BStr {
        BStr::new(&self.bytes)
    }

    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Doubles the capacity until `additional` more bytes fit.
    fn grow_for(&mut self, additional: usize) {
        let needed = self.bytes.len() + additional;
        let capacity = self.bytes.capacity();
        if needed <= capacity {
            return;
        }
        let mut target = capacity.max(1);
        while target < needed {
            target <<= 1;
        }
        self.bytes.reserve_exact(target - self.bytes.len());
    }
}
