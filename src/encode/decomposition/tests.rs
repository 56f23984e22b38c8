use super::*;
use crate::fixtures::{decompose, sample_records};

#[test]
fn test_singletons()
{
    let decompositions = Decompositions::build(&sample_records()).unwrap();

    assert_eq!(decompositions.singletons_p0, vec![0x00C5, 0x4E3D]);
    assert_eq!(decompositions.singletons_p2, vec![0x051C]);

    assert_eq!(decompositions.dm[0x212B], 1);
    assert_eq!(decompositions.dm[0x2F800], 2);
    assert_eq!(decompositions.dm[0x2F81C], 3);
}

#[test]
fn test_pairs_order()
{
    let decompositions = Decompositions::build(&sample_records()).unwrap();

    let pairs: Vec<(u32, u32, u32)> = decompositions
        .pairs
        .iter()
        .map(|e| (e.base, e.combiner, e.order))
        .collect();

    assert_eq!(
        pairs,
        vec![
            (0x0041, 0x0300, 0x00C0),
            (0x0041, 0x0301, 0x00C1),
            (0x0041, 0x030A, 0x00C5),
            (0x0041, 0x0325, 0x1E00),
            (0x0308, 0x0301, 0),
            (0x0915, 0x093C, 0),
            (0x11099, 0x110BA, 0x1109A),
        ]
    );

    // пары нумеруются после синглтонов, в порядке сортировки
    assert_eq!(decompositions.dm[0xC0], 4);
    assert_eq!(decompositions.dm[0xC1], 5);
    assert_eq!(decompositions.dm[0xC5], 6);
    assert_eq!(decompositions.dm[0x1E00], 7);
    assert_eq!(decompositions.dm[0x344], 8);
    assert_eq!(decompositions.dm[0x958], 9);
    assert_eq!(decompositions.dm[0x1109A], 10);
}

#[test]
fn test_pairs_split()
{
    let decompositions = Decompositions::build(&sample_records()).unwrap();

    assert_eq!(decompositions.pairs_u32.len(), 5);
    assert_eq!(decompositions.pairs_u64.len(), 2);

    // каждая пара закодирована ровно одним способом, разбиение не меняет порядок
    let (narrow, wide): (Vec<PairEntry>, Vec<PairEntry>) = decompositions
        .pairs
        .iter()
        .copied()
        .partition(|e| super::u32::encode(e).is_some());

    let decoded_narrow: Vec<PairEntry> =
        decompositions.pairs_u32.iter().map(|&v| super::u32::decode(v)).collect();
    let decoded_wide: Vec<PairEntry> =
        decompositions.pairs_u64.iter().map(|&v| super::u64::decode(v)).collect();

    assert_eq!(decoded_narrow, narrow);
    assert_eq!(decoded_wide, wide);

    assert_eq!(decompositions.stats.count(STATS_PAIR_U32), 5);
    assert_eq!(decompositions.stats.count(STATS_PAIR_U64), 2);
    assert_eq!(decompositions.stats.count(STATS_RECOMPOSABLE), 5);
    assert_eq!(decompositions.stats.count(STATS_SINGLETON_P0), 2);
    assert_eq!(decompositions.stats.count(STATS_SINGLETON_P2), 1);
    assert_eq!(decompositions.stats.count(STATS_HANGUL), 1);
}

#[test]
fn test_round_trip()
{
    let records = sample_records();
    let decompositions = Decompositions::build(&records).unwrap();

    for record in records.iter() {
        let decomposition = decompositions.decompose(decompositions.dm[record.code as usize]);

        match record.is_canonical_decomposition() && record.code != 0xAC00 {
            true => assert_eq!(decomposition, Some(record.decomposition.clone())),
            false => assert_eq!(decomposition, Some(vec![])),
        }
    }

    assert_eq!(decompositions.decompose(11), None);
}

#[test]
fn test_hangul_excluded()
{
    let decompositions = Decompositions::build(&sample_records()).unwrap();

    assert_eq!(decompositions.dm[0xAC00], 0);
    assert!(!decompositions.pairs.iter().any(|e| e.base == 0x1100));
}

#[test]
fn test_compose()
{
    let decompositions = Decompositions::build(&sample_records()).unwrap();

    assert_eq!(decompositions.compose(0x41, 0x300), Some(0xC0));
    assert_eq!(decompositions.compose(0x41, 0x325), Some(0x1E00));
    assert_eq!(decompositions.compose(0x11099, 0x110BA), Some(0x1109A));

    // исключения композиции
    assert_eq!(decompositions.compose(0x308, 0x301), None);
    assert_eq!(decompositions.compose(0x915, 0x93C), None);

    assert_eq!(decompositions.compose(0x42, 0x300), None);
}

#[test]
fn test_order_field()
{
    let mut records = sample_records();

    // нестартер с декомпозицией не собирается обратно
    decompose(&mut records, 0x1E01, &[0x61, 0x325]);
    records[0x1E01].ccc = 230;

    let decompositions = Decompositions::build(&records).unwrap();

    let entry = |base, combiner| {
        *decompositions
            .pairs
            .iter()
            .find(|e| e.base == base && e.combiner == combiner)
            .unwrap()
    };

    assert_eq!(entry(0x41, 0x301).order, 0xC1);
    assert_eq!(entry(0x308, 0x301).order, 0);
    assert_eq!(entry(0x61, 0x325).order, 0);
}

#[test]
fn test_order_from_composed_record()
{
    let mut records = sample_records();

    // решают ccc и исключение составного кодпоинта, а не первого в паре
    records[0xC1].composition_exclusion = true;
    decompose(&mut records, 0x1E04, &[0x308, 0x300]);

    let decompositions = Decompositions::build(&records).unwrap();

    assert_eq!(decompositions.compose(0x41, 0x301), None);
    assert_eq!(decompositions.compose(0x308, 0x300), Some(0x1E04));
    assert_eq!(decompositions.compose(0x41, 0x300), Some(0xC0));
}

#[test]
fn test_arity_violation()
{
    let mut records = sample_records();
    decompose(&mut records, 0x1E08, &[0x43, 0x327, 0x301]);

    match Decompositions::build(&records) {
        Err(Error::DecompositionArity { code, len }) => {
            assert_eq!(code, 0x1E08);
            assert_eq!(len, 3);
        }
        _ => panic!("ожидали ошибку арности"),
    }
}

#[test]
fn test_plane_violation()
{
    let mut records = sample_records();
    decompose(&mut records, 0x2F900, &[0x1D15E]);

    match Decompositions::build(&records) {
        Err(Error::DecompositionPlane { code, target }) => {
            assert_eq!(code, 0x2F900);
            assert_eq!(target, 0x1D15E);
        }
        _ => panic!("ожидали ошибку плоскости"),
    }
}

#[test]
fn test_split_order_violation()
{
    let mut records = sample_records();

    // 64-битная пара с меньшим ключом, чем у 32-битной
    decompose(&mut records, 0x1E02, &[0x41, 0x0300 + 0x1000]);
    decompose(&mut records, 0x1E03, &[0x42, 0x0307]);

    match Decompositions::build(&records) {
        Err(Error::PairOrder { base, combiner }) => {
            assert_eq!(base, 0x42);
            assert_eq!(combiner, 0x307);
        }
        _ => panic!("ожидали ошибку порядка"),
    }
}

#[test]
fn test_lossy_order_field()
{
    let mut records = sample_records();

    // 0x10041 проходит маску 0xFFF0C000, но не помещается в 14 бит
    decompose(&mut records, 0x10041, &[0x61, 0x0301]);

    match Decompositions::build(&records) {
        Err(Error::PairEncoding { base, combiner, order }) => {
            assert_eq!((base, combiner, order), (0x61, 0x301, 0x10041));
        }
        _ => panic!("ожидали ошибку кодирования"),
    }
}
