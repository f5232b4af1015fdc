/// 연간 운송 작업량을 계산한다 (용량 × 항해 거리[nm]).
///
/// 입력은 상위 단계에서 검증된 것으로 본다. 거리가 0 이하이면 그대로 0/음수가 전파되고,
/// 이후 달성 CII 계산에서 `InvalidArgument`로 걸러진다.
pub fn ship_transport_work(capacity: f64, distance_travelled_nm: f64) -> f64 {
    capacity * distance_travelled_nm
}
