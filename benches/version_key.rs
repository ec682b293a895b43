// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jartender::probe::extract_property;
use jartender::version::VersionKey;

const PROPERTY_DUMP: &str = "\
Property settings:
    file.encoding = UTF-8
    java.class.version = 65.0
    java.home = /usr/lib/jvm/temurin-21-jdk-amd64
    java.specification.version = 21
    java.vendor = Eclipse Adoptium
    java.vendor.version = Temurin-21.0.5+11
    java.version = 21.0.5
    os.arch = amd64
    os.name = Linux
";

pub fn bench_version_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("version_key");

    let versions = vec![
        ("unknown", "Unknown"),
        ("short", "21"),
        ("legacy", "1.8.0_442"),
        ("build", "21.0.5+11-LTS"),
        ("garbage", "not-a-version"),
    ];

    for (name, version) in versions {
        group.bench_with_input(BenchmarkId::new("parse", name), &version, |b, v| {
            b.iter(|| VersionKey::parse(black_box(Some(*v))))
        });
    }

    group.bench_function("sort_100", |b| {
        let raw: Vec<String> = (0..100)
            .map(|i| format!("{}.0.{}_{}", 8 + i % 14, i % 7, i))
            .collect();
        b.iter(|| {
            let mut keys: Vec<VersionKey> = raw.iter().map(|v| VersionKey::from(v.as_str())).collect();
            keys.sort();
            keys
        })
    });

    group.finish();
}

pub fn bench_property_extraction(c: &mut Criterion) {
    c.bench_function("extract_java_version", |b| {
        b.iter(|| extract_property(black_box(PROPERTY_DUMP), "java.version"))
    });
}

criterion_group!(benches, bench_version_key, bench_property_extraction);
criterion_main!(benches);
