use std::path::PathBuf;

use boabench::cli::config::BenchmarkConfig;
use boabench::cli::workflows::auc::compute_aucs;
use boabench::domain::read_domains;
use boabench::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

mod common;
use common::loader::*;

fn config(threshold: f64, threads: usize) -> BenchmarkConfig {
    BenchmarkConfig { threshold, threads, ..BenchmarkConfig::default() }
}

fn path_str(path: &PathBuf) -> String {
    path.to_str().unwrap().to_string()
}

fn toy_matrix() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0, 5.0],
        vec![1.0, 0.0, 2.0],
        vec![5.0, 2.0, 0.0],
    ]
}

#[test]
fn test_toy_query_against_identical_candidate() {
    let domains = DomainList::from_labels(["d0", "d1", "d2"]).unwrap();
    let mut boa = DistanceTable::new(3);
    boa.set(0, 1, 1.0);
    boa.set(0, 2, 5.0);
    boa.set(1, 2, 2.0);

    let gold = build_gold_sets(&domains, &boa, 0, 3.0);
    assert_eq!(gold.positives, vec![true, true, false]);
    assert_eq!(gold.negatives, vec![false, false, true]);

    let candidate = boa.clone();
    let ranked = MatrixRanker::new("candidate", &candidate).rank(&domains, 0).unwrap();
    assert_eq!(auc(&roc_curve(&ranked, &gold)), 1.0);
}

#[test]
fn test_toy_files_end_to_end() {
    let dir = scratch_dir("toy");
    let domains = dir.join("domains.txt");
    let boa = dir.join("boa.txt");
    let out = dir.join("boa.auc");
    write_domains(&domains, &["d0".to_string(), "d1".to_string(), "d2".to_string()]);
    write_matrix(&boa, &toy_matrix());

    let paths = vec![path_str(&domains), path_str(&boa), path_str(&boa), path_str(&out)];
    let results = compute_aucs(&paths, &config(1.5, 1)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].auc, 1.0);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "1.000000\n");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_random_ground_truth_scores_exactly_one() {
    let mut rng = rand::thread_rng();
    for n in [2usize, 7, 30] {
        let labels = domain_labels(n);
        let domains = DomainList::from_labels(&labels).unwrap();
        let matrix = random_symmetric(&mut rng, n, 0.1, 10.0);
        let mut boa = DistanceTable::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                boa.set(i, j, matrix[i][j]);
            }
        }
        // Threshold 0 keeps every other domain negative
        let ranker = MatrixRanker::new("boa", &boa);
        assert_eq!(mean_auc(&domains, &boa, &ranker, 0.0).unwrap(), 1.0);
        check_self_auc(&domains, &boa, 0.0).unwrap();
    }
}

#[test]
fn test_reversed_candidate_scores_near_zero() {
    let mut rng = rand::thread_rng();
    let n = 40;
    let dir = scratch_dir("reversed");
    let domains = dir.join("domains.txt");
    let boa = dir.join("boa.txt");
    let reversed = dir.join("reversed.txt");
    let out_boa = dir.join("boa.auc");
    let out_reversed = dir.join("reversed.auc");
    write_domains(&domains, &domain_labels(n));
    let matrix = random_symmetric(&mut rng, n, 0.1, 10.0);
    write_matrix(&boa, &matrix);
    write_matrix(&reversed, &map_off_diagonal(&matrix, |v| 20.0 - v));

    let paths = vec![
        path_str(&domains), path_str(&boa),
        path_str(&boa), path_str(&out_boa),
        path_str(&reversed), path_str(&out_reversed),
    ];
    compute_aucs(&paths, &config(5.0, 2)).unwrap();
    assert_eq!(read_auc(&out_boa), 1.0);
    // The query itself is the only positive ranked ahead of the negatives
    assert!(read_auc(&out_reversed) < 0.1);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_tied_candidates_of_one_class_can_be_reordered() {
    let mut rng = rand::thread_rng();
    let n = 50;
    let labels = domain_labels(n);
    let domains = DomainList::from_labels(&labels).unwrap();
    let mut boa = DistanceTable::new(n);
    let mut candidate = DistanceTable::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            boa.set(i, j, rng.gen_range(0.1..10.0));
            // Few distinct values, so many ties
            candidate.set(i, j, rng.gen_range(1..4) as f64);
        }
    }
    let ranker = MatrixRanker::new("candidate", &candidate);
    for query in 0..n {
        let gold = build_gold_sets(&domains, &boa, query, 5.0);
        let ranked = ranker.rank(&domains, query).unwrap();
        let expected = auc(&roc_curve(&ranked, &gold));

        // Shuffle positives among positive slots and negatives among
        // negative slots inside every group of equal candidate distance
        let mut shuffled = ranked.clone();
        let mut start = 0;
        while start < ranked.len() {
            let d = candidate.get(query, ranked[start]);
            let mut end = start;
            while end < ranked.len() && candidate.get(query, ranked[end]) == d {
                end += 1;
            }
            for class in [true, false] {
                let slots: Vec<usize> = (start..end).filter(|&k| gold.is_positive(ranked[k]) == class).collect();
                let mut atoms: Vec<Atom> = slots.iter().map(|&k| ranked[k]).collect();
                atoms.shuffle(&mut rng);
                for (slot, atom) in slots.into_iter().zip(atoms) {
                    shuffled[slot] = atom;
                }
            }
            start = end;
        }
        assert_eq!(auc(&roc_curve(&shuffled, &gold)), expected);
    }
}

#[test]
fn test_search_database_candidate() {
    let mut rng = rand::thread_rng();
    let n = 12;
    let labels = domain_labels(n);
    let dir = scratch_dir("bowdb");
    let domains_path = dir.join("domains.txt");
    let boa_path = dir.join("boa.txt");
    let db_path = dir.join("fragbag.bowdb");
    let out = dir.join("fragbag.auc");
    write_domains(&domains_path, &labels);
    write_matrix(&boa_path, &random_symmetric(&mut rng, n, 0.1, 10.0));
    let db: String = labels
        .iter()
        .map(|l| {
            let v: Vec<String> = (0..6).map(|_| rng.gen_range(0..5).to_string()).collect();
            format!("{}\t{}\n", l, v.join(" "))
        })
        .collect();
    std::fs::write(&db_path, db).unwrap();

    let paths = vec![path_str(&domains_path), path_str(&boa_path), path_str(&db_path), path_str(&out)];
    let results = compute_aucs(&paths, &config(4.0, 1)).unwrap();
    let written = read_auc(&out);
    assert!((0.0..=1.0).contains(&written));

    let domains = read_domains(&domains_path).unwrap();
    let boa = read_matrix(&domains.registry, &boa_path).unwrap();
    let ranker = SearchRanker::new(Box::new(FlatVectorDb::open(&db_path).unwrap()), &domains.registry).unwrap();
    let expected = mean_auc(&domains, &boa, &ranker, 4.0).unwrap();
    assert_eq!(results[0].auc, expected);
    assert_eq!(format!("{:.6}", expected), format!("{:.6}", written));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_legacy_domains_are_dropped_from_queries_only() {
    let mut rng = rand::thread_rng();
    let n = 10;
    let labels = domain_labels(n);
    let dir = scratch_dir("legacy");
    let cath = dir.join("dompdb");
    std::fs::create_dir_all(&cath).unwrap();
    for label in labels.iter().step_by(2) {
        std::fs::write(cath.join(label), "ATOM").unwrap();
    }
    let domains_path = dir.join("domains.txt");
    let boa_path = dir.join("boa.txt");
    let candidate_path = dir.join("candidate.txt");
    let out = dir.join("candidate.auc");
    write_domains(&domains_path, &labels);
    write_matrix(&boa_path, &random_symmetric(&mut rng, n, 0.1, 10.0));
    write_matrix(&candidate_path, &random_symmetric(&mut rng, n, 0.1, 10.0));

    let mut run_config = config(3.0, 1);
    run_config.cath_dir = Some(path_str(&cath));
    let paths = vec![path_str(&domains_path), path_str(&boa_path), path_str(&candidate_path), path_str(&out)];
    // Fall back to a threshold of 0 when the random draw leaves a query
    // without negatives
    let results = match compute_aucs(&paths, &run_config) {
        Ok(results) => results,
        Err(BenchError::SelfCheck { .. }) => {
            run_config.threshold = 0.0;
            compute_aucs(&paths, &run_config).unwrap()
        }
        Err(e) => panic!("unexpected error: {}", e),
    };

    let mut domains = read_domains(&domains_path).unwrap();
    let boa = read_matrix(&domains.registry, &boa_path).unwrap();
    let candidate = read_matrix(&domains.registry, &candidate_path).unwrap();
    assert_eq!(domains.retain(|id| cath.join(id).exists()), n / 2);
    let ranker = MatrixRanker::new("candidate", &candidate);
    let expected = mean_auc(&domains, &boa, &ranker, run_config.threshold).unwrap();
    assert_eq!(results[0].auc, expected);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_self_check_aborts_before_any_output() {
    let dir = scratch_dir("selfcheck");
    let domains = dir.join("domains.txt");
    let boa = dir.join("boa.txt");
    let out = dir.join("boa.auc");
    write_domains(&domains, &["d0".to_string(), "d1".to_string(), "d2".to_string()]);
    write_matrix(&boa, &toy_matrix());

    // Everything is a positive, so no query has negatives
    let paths = vec![path_str(&domains), path_str(&boa), path_str(&boa), path_str(&out)];
    let err = compute_aucs(&paths, &config(100.0, 1)).unwrap_err();
    assert!(matches!(err, BenchError::SelfCheck { .. }));
    assert!(!out.exists());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_fatal_data_errors() {
    let dir = scratch_dir("fatal");
    let domains = dir.join("domains.txt");
    let boa = dir.join("boa.txt");
    let narrow = dir.join("narrow.txt");
    let db = dir.join("stray.bowdb");
    write_domains(&domains, &["d0".to_string(), "d1".to_string(), "d2".to_string()]);
    write_matrix(&boa, &toy_matrix());
    std::fs::write(&narrow, "0 1\n1 0\n").unwrap();
    std::fs::write(&db, "d0\t1 0\nd9\t0 1\n").unwrap();

    let run = |candidate: &PathBuf| {
        let out = dir.join("out.auc");
        compute_aucs(&[path_str(&domains), path_str(&boa), path_str(candidate), path_str(&out)], &config(1.5, 1))
    };
    assert!(matches!(run(&narrow).unwrap_err(), BenchError::FieldCount { row: 0, expected: 3, found: 2, .. }));
    assert!(matches!(run(&db).unwrap_err(), BenchError::UnknownDomain { ref label, .. } if label == "d9"));

    let odd = vec![path_str(&domains), path_str(&boa), path_str(&boa)];
    assert!(compute_aucs(&odd, &config(1.5, 1)).unwrap_err().is_usage());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_many_sources_in_parallel() {
    let mut rng = rand::thread_rng();
    let n = 20;
    let dir = scratch_dir("parallel");
    let domains = dir.join("domains.txt");
    let boa = dir.join("boa.txt");
    write_domains(&domains, &domain_labels(n));
    let truth = random_symmetric(&mut rng, n, 0.1, 10.0);
    write_matrix(&boa, &truth);

    let mut paths = vec![path_str(&domains), path_str(&boa)];
    for k in 0..6 {
        let candidate = dir.join(format!("aligner{}.txt", k));
        let noisy = map_off_diagonal(&truth, |v| v + rng.gen_range(0.0..(k as f64 + 0.01)));
        write_matrix(&candidate, &noisy);
        paths.push(path_str(&candidate));
        paths.push(path_str(&dir.join(format!("aligner{}.auc", k))));
    }
    let results = compute_aucs(&paths, &config(3.0, 3)).unwrap();
    assert_eq!(results.len(), 6);
    for (k, result) in results.iter().enumerate() {
        assert_eq!(result.output, dir.join(format!("aligner{}.auc", k)));
        assert_eq!(format!("{:.6}", result.auc), format!("{:.6}", read_auc(&result.output)));
        assert!(result.auc > 0.0 && result.auc <= 1.0);
    }
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_library_keeps_system_allocator() {
    let buffer = vec![0u8; 1 << 20];
    assert_eq!(buffer.len(), 1 << 20);
    // Counters only move when the binary installs the tracking allocator
    assert_eq!(peak_alloc::PeakAlloc.peak_usage(), 0);
}
