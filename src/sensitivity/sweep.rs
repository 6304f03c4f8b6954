/// 양 끝값을 포함하는 등간격 수열을 만든다.
///
/// samples가 2 이상이면 첫 원소는 정확히 start, 마지막 원소는 정확히 end이다.
/// 비율 i/(n−1)로 계산해 끝값이 부동소수 누적 오차 없이 떨어지게 한다.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let mut values = Vec::with_capacity(n);
            let span = end - start;
            let last = (n - 1) as f64;
            for i in 0..n {
                values.push(start + span * (i as f64) / last);
            }
            values
        }
    }
}
