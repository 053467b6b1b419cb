use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::core::types::HashAlgorithm;

pub fn digest_bytes(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(data);
            format!("{:x}", hasher.finalize())
        }
        HashAlgorithm::Sha1 => {
            let mut hasher = Sha1::new();
            hasher.update(data);
            format!("{:x}", hasher.finalize())
        }
        HashAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            format!("{:x}", hasher.finalize())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_empty_input() {
        assert_eq!(
            digest_bytes(HashAlgorithm::Md5, b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            digest_bytes(HashAlgorithm::Sha1, b""),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            digest_bytes(HashAlgorithm::Sha256, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_reference_vectors() {
        let data = b"The quick brown fox jumps over the lazy dog";

        assert_eq!(
            digest_bytes(HashAlgorithm::Md5, data),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
        assert_eq!(
            digest_bytes(HashAlgorithm::Sha1, data),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );
        assert_eq!(
            digest_bytes(HashAlgorithm::Sha256, data),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn test_digest_consistency() {
        let data = b"test data";
        assert_eq!(
            digest_bytes(HashAlgorithm::Sha256, data),
            digest_bytes(HashAlgorithm::Sha256, data)
        );
    }
}
