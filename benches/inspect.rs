use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use file_entry::{FileEntry, HashAlgorithm};
use std::fs;
use tempfile::TempDir;

fn benchmark_hashing(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("payload.bin");
    let payload = vec![0xABu8; 1024 * 1024];
    fs::write(&file_path, &payload).unwrap();

    let mut group = c.benchmark_group("hashing");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for algorithm in [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
    ] {
        group.bench_function(algorithm.as_str(), |b| {
            let entry = FileEntry::new(&file_path);
            b.iter(|| black_box(entry.hash(algorithm)));
        });
    }

    group.finish();
}

fn benchmark_mime_sniffing(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();

    let text_path = temp_dir.path().join("notes.txt");
    fs::write(&text_path, "plain text content\n".repeat(200)).unwrap();

    let binary_path = temp_dir.path().join("blob.bin");
    let mut blob = vec![0x01u8; 4096];
    blob[0] = 0x00;
    fs::write(&binary_path, &blob).unwrap();

    c.bench_function("mime_text", |b| {
        let entry = FileEntry::new(&text_path);
        b.iter(|| black_box(entry.mime_type()));
    });

    c.bench_function("mime_binary", |b| {
        let entry = FileEntry::new(&binary_path);
        b.iter(|| black_box(entry.mime_type()));
    });
}

criterion_group!(benches, benchmark_hashing, benchmark_mime_sniffing);
criterion_main!(benches);
